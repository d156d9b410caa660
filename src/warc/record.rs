//! WARC record types and the bounded payload reader.

use std::io::{self, BufRead, Read};

use chrono::{DateTime, FixedOffset};
use url::Url;

use super::headers::HeaderMap;
use super::iterator::CountingReader;
use crate::encoding;

/// Bitmask matching every record type.
pub const ANY_TYPE: u16 = 0xffff;

/// WARC record type, parsed from the `WARC-Type` header.
///
/// Each variant carries a distinct bit so sets of types can be expressed
/// as a `u16` mask for [`ArchiveIterator::with_record_filter`].
///
/// [`ArchiveIterator::with_record_filter`]: super::ArchiveIterator::with_record_filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum WarcRecordType {
    WarcInfo = 2,
    Response = 4,
    Resource = 8,
    Request = 16,
    Metadata = 32,
    Revisit = 64,
    Conversion = 128,
    Continuation = 256,
    Unknown = 512,
}

impl WarcRecordType {
    /// Canonical lowercase spelling of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            WarcRecordType::WarcInfo => "warcinfo",
            WarcRecordType::Response => "response",
            WarcRecordType::Resource => "resource",
            WarcRecordType::Request => "request",
            WarcRecordType::Metadata => "metadata",
            WarcRecordType::Revisit => "revisit",
            WarcRecordType::Conversion => "conversion",
            WarcRecordType::Continuation => "continuation",
            WarcRecordType::Unknown => "unknown",
        }
    }

    /// Parse a `WARC-Type` value, case-insensitively. Unknown spellings
    /// map to [`WarcRecordType::Unknown`].
    #[must_use]
    pub fn from_label(label: &[u8]) -> Self {
        match label.to_ascii_lowercase().as_slice() {
            b"warcinfo" => WarcRecordType::WarcInfo,
            b"response" => WarcRecordType::Response,
            b"resource" => WarcRecordType::Resource,
            b"request" => WarcRecordType::Request,
            b"metadata" => WarcRecordType::Metadata,
            b"revisit" => WarcRecordType::Revisit,
            b"conversion" => WarcRecordType::Conversion,
            b"continuation" => WarcRecordType::Continuation,
            _ => WarcRecordType::Unknown,
        }
    }

    /// Whether this type's bit is set in `mask`.
    #[must_use]
    pub fn matches_bitmask(&self, mask: u16) -> bool {
        (*self as u16) & mask != 0
    }
}

/// Bounded reader over one record's payload.
///
/// Yields at most `content_length − http_header_bytes` bytes from the
/// underlying stream. Valid until the owning record is dropped; the
/// iterator drains any unread remainder before parsing the next record.
#[derive(Debug)]
pub struct BodyReader<'a, R> {
    pub(super) stream: &'a mut CountingReader<R>,
    pub(super) remaining: u64,
}

impl<R: BufRead> BodyReader<'_, R> {
    /// Payload bytes not yet read.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl<R: BufRead> Read for BodyReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 || buf.is_empty() {
            return Ok(0);
        }
        let take = usize::try_from(self.remaining.min(buf.len() as u64)).unwrap_or(buf.len());
        let n = self.stream.read(&mut buf[..take])?;
        self.remaining -= n as u64;
        Ok(n)
    }
}

/// One parsed WARC record.
///
/// Borrows the iterator's stream for payload access; advancing the
/// iterator requires this record to be dropped first.
#[derive(Debug)]
pub struct WarcRecord<'a, R> {
    pub(super) record_type: WarcRecordType,
    pub(super) headers: HeaderMap,
    pub(super) is_http: bool,
    pub(super) http_headers: Option<HeaderMap>,
    pub(super) content_length: u64,
    pub(super) http_content_length: u64,
    pub(super) body: BodyReader<'a, R>,
}

impl<'a, R: BufRead> WarcRecord<'a, R> {
    /// Record type (same as the `WARC-Type` header).
    #[must_use]
    pub fn record_type(&self) -> WarcRecordType {
        self.record_type
    }

    /// WARC record headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Whether the record payload is an HTTP message
    /// (WARC `Content-Type` starts with `application/http`).
    #[must_use]
    pub fn is_http(&self) -> bool {
        self.is_http
    }

    /// First line of the inner HTTP block; empty when the record is not
    /// HTTP.
    #[must_use]
    pub fn http_status_line(&self) -> &[u8] {
        self.http_headers
            .as_ref()
            .map_or(b"".as_slice(), HeaderMap::status_line_bytes)
    }

    /// Inner HTTP headers, excluding the status line.
    #[must_use]
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.http_headers.as_ref()
    }

    /// WARC `Content-Length`: the full record body size in bytes,
    /// including any HTTP header block.
    #[must_use]
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// Payload bytes after the HTTP header block. Equals
    /// [`content_length`](Self::content_length) for non-HTTP records.
    #[must_use]
    pub fn http_content_length(&self) -> u64 {
        self.http_content_length
    }

    /// `WARC-Record-ID` header value.
    #[must_use]
    pub fn record_id(&self) -> Option<String> {
        self.headers.get("WARC-Record-ID")
    }

    /// `WARC-Date` header parsed as an RFC 3339 timestamp.
    #[must_use]
    pub fn record_date(&self) -> Option<DateTime<FixedOffset>> {
        let date = self.headers.get("WARC-Date")?;
        DateTime::parse_from_rfc3339(date.trim()).ok()
    }

    /// `WARC-Target-URI` header parsed as a URL, tolerating the
    /// angle-bracketed form some writers emit.
    #[must_use]
    pub fn target_url(&self) -> Option<Url> {
        let uri = self.headers.get("WARC-Target-URI")?;
        let uri = uri.trim();
        let uri = uri
            .strip_prefix('<')
            .and_then(|u| u.strip_suffix('>'))
            .unwrap_or(uri);
        Url::parse(uri).ok()
    }

    /// Media type of the inner HTTP block without parameters such as
    /// `charset=`.
    #[must_use]
    pub fn http_content_type(&self) -> Option<String> {
        let content_type = self.http_headers.as_ref()?.get("Content-Type")?;
        content_type
            .split(';')
            .next()
            .map(|s| s.trim().to_ascii_lowercase())
    }

    /// `charset=` parameter of the inner HTTP `Content-Type`, lowercased
    /// and validated against the known encoding labels.
    #[must_use]
    pub fn http_charset(&self) -> Option<String> {
        let content_type = self.http_headers.as_ref()?.get("Content-Type")?;
        let lowered = content_type.to_ascii_lowercase();
        let charset = lowered.split_once("charset=")?.1;
        let charset = charset
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches('"');
        encoding::encoding_for_label(charset).map(|_| charset.to_string())
    }

    /// Bounded reader over the remaining payload bytes.
    pub fn body(&mut self) -> &mut BodyReader<'a, R> {
        &mut self.body
    }

    /// Read the remaining payload into a vector.
    ///
    /// # Errors
    ///
    /// Propagates upstream I/O failures.
    pub fn read_body(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(usize::try_from(self.body.remaining).unwrap_or(0));
        self.body.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
