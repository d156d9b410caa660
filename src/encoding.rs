//! Charset decoding of record payloads.
//!
//! Converts HTTP payload bytes to UTF-8 using, in order: a byte-order
//! mark, the caller's charset hint (typically from the inner HTTP
//! `Content-Type`), a `<meta charset>` declaration in the first kilobyte,
//! and finally lossy UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// Match `<meta charset="...">`.
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("CHARSET_META_RE regex")
});

/// How many leading bytes are searched for a `<meta charset>` tag.
const META_SNIFF_WINDOW: usize = 1024;

/// Resolve a charset label to a known encoding.
#[inline]
#[must_use]
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Detect the payload encoding without decoding.
///
/// The hint wins when it names a known encoding; otherwise the first
/// kilobyte is sniffed for a `<meta charset>` declaration. Defaults to
/// UTF-8.
#[must_use]
pub fn detect_encoding(payload: &[u8], charset_hint: Option<&str>) -> &'static Encoding {
    if let Some(hint) = charset_hint {
        if let Some(encoding) = encoding_for_label(hint) {
            return encoding;
        }
    }
    let head = &payload[..payload.len().min(META_SNIFF_WINDOW)];
    if let Some(captures) = CHARSET_META_RE.captures(head) {
        if let Some(label) = captures.get(1) {
            if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
                return encoding;
            }
        }
    }
    UTF_8
}

/// Decode payload bytes to a UTF-8 string.
///
/// A byte-order mark overrides both the hint and any meta declaration.
/// Undecodable sequences become U+FFFD; this function never fails.
#[must_use]
pub fn decode_payload(payload: &[u8], charset_hint: Option<&str>) -> String {
    let encoding = detect_encoding(payload, charset_hint);
    let (decoded, _, _) = encoding.decode(payload);
    decoded.into_owned()
}
