//! Inline SVG to data URI conversion.

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use regex::Regex;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// First complete `<svg>...</svg>` element in a fragment.
#[allow(clippy::expect_used)]
static SVG_ELEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<svg\b.*?</svg\s*>").expect("valid regex"));

/// Opening `<svg ...>` tag.
#[allow(clippy::expect_used)]
static SVG_OPEN_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^<svg\b[^>]*>").expect("valid regex"));

/// Convert markup containing an inline SVG into a base64 `data:` URI.
///
/// Returns `None` when the input is absent or holds no `<svg>` element.
///
/// # Examples
/// ```
/// use logo_extract::helpers::svg::to_data_uri;
///
/// let uri = to_data_uri(Some(r#"<svg viewBox="0 0 1 1"></svg>"#));
/// assert!(uri.is_some_and(|u| u.starts_with("data:image/svg+xml;base64,")));
/// assert_eq!(to_data_uri(None), None);
/// ```
#[must_use]
pub fn to_data_uri(markup: Option<&str>) -> Option<String> {
    let svg = SVG_ELEMENT_RE.find(markup?)?.as_str();
    let svg = with_namespace(svg);

    Some(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes())))
}

/// Standalone SVG documents need the namespace that HTML lets inline SVG omit.
fn with_namespace(svg: &str) -> String {
    let has_namespace = SVG_OPEN_TAG_RE
        .find(svg)
        .is_some_and(|open| open.as_str().contains("xmlns="));

    if has_namespace {
        svg.to_string()
    } else {
        format!("<svg xmlns=\"{SVG_NAMESPACE}\"{}", &svg[4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(uri: &str) -> String {
        let payload = uri
            .strip_prefix("data:image/svg+xml;base64,")
            .unwrap_or_else(|| panic!("unexpected prefix: {uri}"));
        let bytes = STANDARD
            .decode(payload)
            .unwrap_or_else(|err| panic!("invalid base64: {err}"));
        String::from_utf8(bytes).unwrap_or_else(|err| panic!("invalid utf8: {err}"))
    }

    #[test]
    fn test_absent_input() {
        assert_eq!(to_data_uri(None), None);
    }

    #[test]
    fn test_no_svg_in_markup() {
        assert_eq!(to_data_uri(Some("")), None);
        assert_eq!(to_data_uri(Some(r#"<img src="/logo.png">"#)), None);
        assert_eq!(to_data_uri(Some("<svg viewBox=\"0 0 1 1\">unterminated")), None);
    }

    #[test]
    fn test_extracts_svg_from_surrounding_markup() {
        let markup = r#"<span>Acme</span><svg viewBox="0 0 10 10"><path d="M0 0h10v10H0z"/></svg><span>Inc</span>"#;
        let uri = to_data_uri(Some(markup)).unwrap_or_default();
        let svg = decode(&uri);

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("Acme"));
    }

    #[test]
    fn test_existing_namespace_kept() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4"></svg>"#;
        let uri = to_data_uri(Some(markup)).unwrap_or_default();
        assert_eq!(decode(&uri), markup);
    }

    #[test]
    fn test_uppercase_tag() {
        let uri = to_data_uri(Some("<SVG width=\"1\"></SVG>"));
        assert!(uri.is_some());
    }
}
