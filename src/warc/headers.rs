//! WARC and HTTP header block parsing.
//!
//! Header blocks are CRLF-terminated `Name: Value` lines with
//! whitespace-led continuation lines, ended by a bare `\r\n`. Values keep
//! their original bytes; keys keep their original case and compare
//! case-insensitively.

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::text_ops::strip_bytes;

/// Ordered collection of header pairs plus an optional status line.
///
/// Duplicate names are permitted and preserved in order; [`HeaderMap::get`]
/// joins duplicates with `,` the way HTTP intermediaries do.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    status_line: Vec<u8>,
    headers: Vec<(Vec<u8>, Vec<u8>)>,
}

impl HeaderMap {
    /// Create an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The status line as a lossily-decoded string. Empty when the block
    /// had none.
    #[must_use]
    pub fn status_line(&self) -> String {
        String::from_utf8_lossy(&self.status_line).into_owned()
    }

    /// The raw status line bytes.
    #[must_use]
    pub fn status_line_bytes(&self) -> &[u8] {
        &self.status_line
    }

    /// Set the status line.
    pub fn set_status_line(&mut self, status_line: impl AsRef<[u8]>) {
        self.status_line = status_line.as_ref().to_vec();
    }

    /// HTTP status code, when the status line is an HTTP response line.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        if !self.status_line.starts_with(b"HTTP/") {
            return None;
        }
        let mut parts = self.status_line.splitn(3, |&b| b == b' ');
        parts.next()?;
        std::str::from_utf8(parts.next()?).ok()?.parse().ok()
    }

    /// Value for a case-insensitive key as a string.
    /// Duplicate headers are joined with `,`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_bytes(key.as_bytes())
            .map(|v| String::from_utf8_lossy(&v).into_owned())
    }

    /// Value for a case-insensitive key as bytes.
    /// Duplicate headers are joined with `,`.
    #[must_use]
    pub fn get_bytes(&self, key: &[u8]) -> Option<Vec<u8>> {
        let values: Vec<&[u8]> = self
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_slice())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(b",".as_slice()))
        }
    }

    /// Whether a case-insensitive key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        let key = key.as_bytes();
        self.headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
    }

    /// Append a header without checking for duplicates.
    pub fn append(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) {
        self.headers.push((
            strip_bytes(key.as_ref()).to_vec(),
            strip_bytes(value.as_ref()).to_vec(),
        ));
    }

    /// Iterator of raw key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> + '_ {
        self.headers.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    /// Iterator of lossily-decoded key/value pairs in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.iter().map(|(k, v)| {
            (
                String::from_utf8_lossy(k).into_owned(),
                String::from_utf8_lossy(v).into_owned(),
            )
        })
    }

    /// Number of headers (the status line does not count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether the map holds no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    fn add_continuation(&mut self, value: &[u8]) {
        // A continuation before any header is ignored.
        if let Some(last) = self.headers.last_mut() {
            last.1.push(b'\n');
            last.1.extend_from_slice(value);
        }
    }
}

/// Parse one header block from `reader` into `headers`.
///
/// Reads lines through `\r\n` until the bare `\r\n` terminator. With
/// `has_status_line` the first line is stored as the block's status line
/// instead of being split on `:`. Returns the total number of bytes
/// consumed, including the terminator. Fails with
/// [`Error::UnexpectedEof`] when the stream ends before the terminator.
pub fn parse_header_block<R: BufRead>(
    reader: &mut R,
    headers: &mut HeaderMap,
    has_status_line: bool,
) -> Result<u64> {
    let mut consumed = 0u64;
    let mut first = true;
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            return Err(Error::UnexpectedEof);
        }
        consumed += n as u64;

        if line == b"\r\n" {
            return Ok(consumed);
        }

        if first && has_status_line {
            headers.set_status_line(strip_bytes(&line));
            first = false;
            continue;
        }
        first = false;

        if line[0].is_ascii_whitespace() {
            headers.add_continuation(strip_bytes(&line));
            continue;
        }

        match line.iter().position(|&b| b == b':') {
            Some(pos) => headers.append(&line[..pos], &line[pos + 1..]),
            // No delimiter: the whole line is the key.
            None => headers.append(strip_bytes(&line), b""),
        }
    }
}
