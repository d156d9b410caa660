//! # warctext
//!
//! Web-archive text extraction toolkit: a streaming WARC record iterator
//! and an HTML-to-plain-text converter with heuristic main-content
//! filtering.
//!
//! The two subsystems compose naturally: iterate a crawl archive, decode
//! each HTML response payload, and reduce it to readable text with the
//! navigation, ads, comments and other page chrome stripped away.
//!
//! ## Quick start: text extraction
//!
//! ```rust
//! use warctext::{extract_text, ExtractOpts};
//!
//! let html = "<html><body><p>Hello <b>world</b>!</p></body></html>";
//! let text = extract_text(html, &ExtractOpts::default());
//! assert_eq!(text, "Hello world!");
//! ```
//!
//! ## Quick start: WARC iteration
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use warctext::warc::ArchiveIterator;
//!
//! # fn main() -> warctext::Result<()> {
//! let stream = BufReader::new(File::open("crawl.warc")?);
//! let mut archive = ArchiveIterator::new(stream);
//! while let Some(mut record) = archive.next_record()? {
//!     let body = record.read_body()?;
//!     println!("{}: {} payload bytes", record.record_type().as_str(), body.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Compressed archives are out of scope here: wrap the stream in a
//! gzip/zstd decoder before handing it to [`warc::ArchiveIterator`].

mod error;
mod extract;
mod options;
mod patterns;
mod serializer;
mod walker;

/// Heuristic main-content classification of DOM elements.
pub mod classifier;

/// Byte-level whitespace primitives (strip, collapse, indent).
pub mod text_ops;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Charset decoding of record payloads.
pub mod encoding;

/// Streaming WARC record iteration.
pub mod warc;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract_document, extract_plain_text};
pub use options::ExtractOpts;
pub use warc::{ArchiveIterator, WarcRecord, WarcRecordType};

/// Extract plain text from an HTML string using the given options.
///
/// Convenience wrapper that parses with `dom_query` and runs
/// [`extract_plain_text`] on the resulting document.
///
/// # Example
///
/// ```rust
/// use warctext::{extract_text, ExtractOpts};
///
/// let opts = ExtractOpts { links: true, ..ExtractOpts::default() };
/// let text = extract_text(
///     r#"<p><a href="https://x.example">click</a></p>"#,
///     &opts,
/// );
/// assert_eq!(text, "click (https://x.example)");
/// ```
#[must_use]
pub fn extract_text(html: &str, opts: &ExtractOpts) -> String {
    let document = dom::parse(html);
    extract_document(&document, opts)
}
