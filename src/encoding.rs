//! Character encoding detection for fetched pages.
//!
//! The charset comes from the HTTP `Content-Type` header when the server
//! sends one, otherwise from the document's own meta declarations, and
//! defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes of the document inspected for a meta charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">`, or the charset inside a
/// `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("valid regex")
});

/// Match `charset=...` in a `Content-Type` header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Encoding named by a `Content-Type` header value, if recognised.
#[must_use]
pub fn encoding_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Encoding declared by the document itself, if recognised.
///
/// Only the first kilobyte is examined.
#[must_use]
pub fn encoding_from_meta(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Decode a fetched page body to UTF-8.
///
/// Invalid sequences become U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use logo_extract::encoding::decode_page;
///
/// let body = b"<html><body>Caf\xE9</body></html>";
/// let html = decode_page(body, Some("text/html; charset=ISO-8859-1"));
/// assert!(html.contains("Café"));
/// ```
#[must_use]
pub fn decode_page(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(encoding_from_content_type)
        .or_else(|| encoding_from_meta(body))
        .unwrap_or(UTF_8);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_detected() {
        let encoding = encoding_from_content_type("text/html; charset=ISO-8859-1");
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG spec
        assert_eq!(encoding.map(Encoding::name), Some("windows-1252"));

        let encoding = encoding_from_content_type("text/html;charset=\"utf-8\"");
        assert_eq!(encoding, Some(UTF_8));
    }

    #[test]
    fn header_without_charset() {
        assert_eq!(encoding_from_content_type("text/html"), None);
        assert_eq!(encoding_from_content_type("text/html; charset=bogus"), None);
    }

    #[test]
    fn meta_charset_detected() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(encoding_from_meta(html).map(Encoding::name), Some("windows-1252"));

        let html = b"<HTML><HEAD><META CHARSET=utf-8></HEAD></HTML>";
        assert_eq!(encoding_from_meta(html), Some(UTF_8));
    }

    #[test]
    fn meta_http_equiv_detected() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        assert_eq!(encoding_from_meta(html).map(Encoding::name), Some("windows-1252"));
    }

    #[test]
    fn header_wins_over_meta() {
        let body = b"<html><head><meta charset=\"utf-8\"></head><body>Caf\xE9</body></html>";
        let html = decode_page(body, Some("text/html; charset=windows-1252"));
        assert!(html.contains("Café"));
    }

    #[test]
    fn meta_used_without_header() {
        let body = b"<html><head><meta charset=\"windows-1252\"></head><body>\x93Hi\x94</body></html>";
        let html = decode_page(body, Some("text/html"));
        assert!(html.contains("\u{201C}Hi\u{201D}"));
    }

    #[test]
    fn invalid_utf8_is_lossy() {
        let body = b"<html><body>Test \xFF\xFE Invalid</body></html>";
        let html = decode_page(body, None);
        assert!(html.contains("Test"));
        assert!(html.contains("Invalid"));
    }
}
