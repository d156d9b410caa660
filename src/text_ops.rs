//! Byte-level string primitives shared by the WARC parser and the
//! serializer.
//!
//! All functions operate on ASCII whitespace only and never split
//! multi-byte UTF-8 sequences (non-ASCII bytes are always > 0x7F and
//! therefore never classified as whitespace).

/// Strip leading and trailing ASCII whitespace.
#[inline]
#[must_use]
pub fn strip(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Strip leading and trailing ASCII whitespace from a byte slice.
#[inline]
#[must_use]
pub fn strip_bytes(s: &[u8]) -> &[u8] {
    s.trim_ascii()
}

/// Collapse every maximal run of ASCII whitespace into a single space.
///
/// Empty input yields empty output. Idempotent.
#[must_use]
pub fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_ws = false;
    for c in s.chars() {
        if c.is_ascii_whitespace() {
            in_ws = true;
        } else {
            if in_ws {
                out.push(' ');
            }
            in_ws = false;
            out.push(c);
        }
    }
    if in_ws {
        out.push(' ');
    }
    out
}

/// Map A–Z to a–z, leaving all other bytes untouched.
#[inline]
#[must_use]
pub fn to_lower_ascii(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Insert `2 * depth` spaces after every `\n`.
#[must_use]
pub fn indent_newlines(s: &str, depth: usize) -> String {
    let indent = " ".repeat(2 * depth);
    let mut out = String::with_capacity(s.len() + indent.len() * 4);
    for c in s.chars() {
        out.push(c);
        if c == '\n' {
            out.push_str(&indent);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_ascii_whitespace_only() {
        assert_eq!(strip(" \t hello \r\n"), "hello");
        assert_eq!(strip(""), "");
        assert_eq!(strip(" \t\r\n "), "");
        // U+00A0 is not ASCII whitespace and must survive
        assert_eq!(strip("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
    }

    #[test]
    fn strip_is_idempotent() {
        let once = strip("  a b  ");
        assert_eq!(strip(once), once);
    }

    #[test]
    fn collapse_ws_single_space_runs() {
        assert_eq!(collapse_ws("a  b\t\nc"), "a b c");
        assert_eq!(collapse_ws(""), "");
        assert_eq!(collapse_ws("   "), " ");
        assert_eq!(collapse_ws(" x "), " x ");
    }

    #[test]
    fn collapse_ws_is_idempotent() {
        for s in ["a  b\t\nc", "  leading", "trailing  ", "\t\t"] {
            let once = collapse_ws(s);
            assert_eq!(collapse_ws(&once), once);
        }
    }

    #[test]
    fn collapse_ws_preserves_multibyte() {
        assert_eq!(collapse_ws("héllo \u{2022}  wörld"), "héllo \u{2022} wörld");
    }

    #[test]
    fn indent_newlines_inserts_two_spaces_per_depth() {
        assert_eq!(indent_newlines("a\nb\nc", 1), "a\n  b\n  c");
        assert_eq!(indent_newlines("a\nb", 2), "a\n    b");
        assert_eq!(indent_newlines("no newline", 3), "no newline");
    }

    #[test]
    fn to_lower_ascii_leaves_non_ascii() {
        assert_eq!(to_lower_ascii("AbC-É"), "abc-É");
    }
}
