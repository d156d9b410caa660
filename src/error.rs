//! Error types for WARC iteration.
//!
//! Extraction never fails: malformed or empty DOM input yields an empty
//! string. All fallible paths live on the WARC side.

/// Error type for WARC parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Upstream byte-stream failure.
    #[error("stream I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A header block violated the protocol (e.g. non-decimal
    /// `Content-Length`).
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The stream ended inside a header block before the empty
    /// terminator line.
    #[error("unexpected end of stream inside header block")]
    UnexpectedEof,
}

/// Result type alias for WARC parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
