//! Streaming WARC/1.0 and WARC/1.1 record iteration.
//!
//! [`ArchiveIterator`] scans an uncompressed WARC byte stream and yields
//! one [`WarcRecord`] at a time. Records expose their typed WARC headers,
//! the inner HTTP header block when present, and a bounded reader over the
//! payload. Decompression is the caller's concern: wrap the stream in a
//! gzip/zstd decoder one layer below.

mod headers;
mod iterator;
mod record;

pub use headers::{parse_header_block, HeaderMap};
pub use iterator::ArchiveIterator;
pub use record::{BodyReader, WarcRecord, WarcRecordType, ANY_TYPE};
