//! The streaming record iterator.

use std::io::{self, BufRead, Read};

use log::{debug, warn};

use super::headers::{parse_header_block, HeaderMap};
use super::record::{BodyReader, WarcRecord, WarcRecordType, ANY_TYPE};
use crate::error::{Error, Result};
use crate::text_ops::strip_bytes;

/// `BufRead` wrapper tracking the absolute stream position, so the
/// iterator can tell how much of a record's payload is left to drain.
#[derive(Debug)]
pub(super) struct CountingReader<R> {
    inner: R,
    pos: u64,
}

impl<R: BufRead> CountingReader<R> {
    fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    pub(super) fn pos(&self) -> u64 {
        self.pos
    }
}

impl<R: BufRead> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.pos += n as u64;
        Ok(n)
    }
}

impl<R: BufRead> BufRead for CountingReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
        self.pos += amt as u64;
    }
}

/// Lazy iterator over the records of an uncompressed WARC stream.
///
/// Advancing never reads payload eagerly: each record exposes a bounded
/// [`BodyReader`] and `next_record` first drains whatever the caller left
/// unread. Iteration ends cleanly (`Ok(None)`) at end of stream, on a
/// non-WARC version line, or on a record without a `Content-Length`;
/// protocol violations inside a header block surface as errors and latch
/// the iterator shut.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
/// use warctext::warc::ArchiveIterator;
///
/// # fn main() -> warctext::Result<()> {
/// let file = BufReader::new(File::open("crawl.warc")?);
/// let mut archive = ArchiveIterator::new(file);
/// while let Some(record) = archive.next_record()? {
///     println!("{} {} bytes", record.record_type().as_str(), record.content_length());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ArchiveIterator<R> {
    stream: CountingReader<R>,
    record_filter: u16,
    payload_end: u64,
    finished: bool,
}

impl<R: BufRead> ArchiveIterator<R> {
    /// Iterate all records of `reader`.
    pub fn new(reader: R) -> Self {
        Self::with_record_filter(reader, ANY_TYPE)
    }

    /// Iterate only records whose type bit is set in `mask` (see
    /// [`WarcRecordType`]); everything else is drained and skipped.
    pub fn with_record_filter(reader: R, mask: u16) -> Self {
        Self {
            stream: CountingReader::new(reader),
            record_filter: mask,
            payload_end: 0,
            finished: false,
        }
    }

    /// Parse and yield the next record.
    ///
    /// Returns `Ok(None)` at clean end of archive, which includes a
    /// non-WARC version line and a record missing its `Content-Length`.
    /// The previous record's unread payload is skipped first.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] on stream failure, [`Error::MalformedHeader`] on a
    /// present-but-invalid `Content-Length`, [`Error::UnexpectedEof`] on
    /// a truncated header block. After any error the iterator stays
    /// finished.
    pub fn next_record(&mut self) -> Result<Option<WarcRecord<'_, R>>> {
        if self.finished {
            return Ok(None);
        }
        // Latched shut on every early return; unlatched again right
        // before a record is yielded.
        self.finished = true;

        loop {
            self.skip_to_payload_end()?;

            let Some(version) = self.seek_version_line()? else {
                return Ok(None);
            };
            if version != b"WARC/1.0" && version != b"WARC/1.1" {
                warn!(
                    "stopping on non-WARC line: {:?}",
                    String::from_utf8_lossy(&version)
                );
                return Ok(None);
            }

            let mut headers = HeaderMap::new();
            parse_header_block(&mut self.stream, &mut headers, false)?;

            let mut content_length: Option<u64> = None;
            let mut record_type = WarcRecordType::Unknown;
            let mut is_http = false;
            for (key, value) in headers.iter() {
                match key.to_ascii_lowercase().as_slice() {
                    b"content-length" => {
                        let digits = std::str::from_utf8(value).map_err(|_| {
                            Error::MalformedHeader("non-ASCII Content-Length".into())
                        })?;
                        content_length = Some(digits.parse().map_err(|_| {
                            Error::MalformedHeader(format!("invalid Content-Length: {digits:?}"))
                        })?);
                    }
                    b"warc-type" => record_type = WarcRecordType::from_label(value),
                    b"content-type" => {
                        if value.starts_with(b"application/http") {
                            is_http = true;
                        }
                    }
                    _ => {}
                }
            }
            let Some(content_length) = content_length else {
                warn!("stopping on record without Content-Length");
                return Ok(None);
            };

            let mut http_headers = None;
            let mut http_header_bytes = 0u64;
            if is_http {
                let mut block = HeaderMap::new();
                http_header_bytes = parse_header_block(&mut self.stream, &mut block, true)?;
                http_headers = Some(block);
            }

            let payload_length = content_length.saturating_sub(http_header_bytes);
            self.payload_end = self.stream.pos() + payload_length;

            if !record_type.matches_bitmask(self.record_filter) {
                debug!(
                    "skipping {} record ({content_length} bytes)",
                    record_type.as_str()
                );
                continue;
            }

            debug!(
                "yielding {} record ({content_length} bytes)",
                record_type.as_str()
            );
            self.finished = false;
            return Ok(Some(WarcRecord {
                record_type,
                headers,
                is_http,
                http_headers,
                content_length,
                http_content_length: if is_http { payload_length } else { content_length },
                body: BodyReader {
                    stream: &mut self.stream,
                    remaining: payload_length,
                },
            }));
        }
    }

    /// Drain whatever the caller left unread of the previous payload.
    fn skip_to_payload_end(&mut self) -> Result<()> {
        let mut scratch = [0u8; 8192];
        while self.stream.pos() < self.payload_end {
            let want = (self.payload_end - self.stream.pos()).min(scratch.len() as u64);
            #[allow(clippy::cast_possible_truncation)]
            let n = self.stream.read(&mut scratch[..want as usize])?;
            if n == 0 {
                // Truncated payload: nothing more will follow.
                return Ok(());
            }
        }
        Ok(())
    }

    /// Read lines until a non-empty one appears. `Ok(None)` on EOF.
    fn seek_version_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        loop {
            line.clear();
            let n = self.stream.read_until(b'\n', &mut line)?;
            if n == 0 {
                return Ok(None);
            }
            let stripped = strip_bytes(&line);
            if !stripped.is_empty() {
                return Ok(Some(stripped.to_vec()));
            }
        }
    }
}
