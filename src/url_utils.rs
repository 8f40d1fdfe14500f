//! URL Utility Functions
//!
//! Validation and resolution of raw image references against the URL of the
//! page they were found on.
//!
//! Resolution is deliberately simpler than RFC 3986 joining: path-relative
//! references are appended to the page URL verbatim, so `..` segments and
//! missing trailing slashes are left as the page URL dictates.

use url::Url;

use crate::error::{Error, Result};

/// Check if a string is a well-formed absolute URL (scheme plus host).
///
/// # Examples
/// ```
/// use logo_extract::url_utils::is_valid_absolute_url;
///
/// assert!(is_valid_absolute_url("https://example.com/logo.png"));
/// assert!(!is_valid_absolute_url("/logo.png"));
/// assert!(!is_valid_absolute_url("data:image/png;base64,AAAA"));
/// ```
#[must_use]
pub fn is_valid_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if s.is_empty() {
        return false;
    }

    match Url::parse(s) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// Scheme and authority (host plus explicit port) of a page URL.
///
/// Returns empty strings when the URL cannot be parsed.
#[must_use]
pub fn scheme_and_host(page_url: &str) -> (String, String) {
    let Ok(url) = Url::parse(page_url.trim()) else {
        return (String::new(), String::new());
    };

    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };

    (url.scheme().to_string(), host)
}

/// Resolve a raw image reference against the page's final URL.
///
/// Checked in order:
/// 1. already absolute: unchanged
/// 2. `data:` payload: unchanged
/// 3. `//host/path`: page scheme prepended
/// 4. `/path`: page scheme and host prepended
/// 5. anything else: appended to the page URL
///
/// Whitespace around the reference is ignored. A malformed page URL never
/// fails; scheme and host degrade to empty strings. Use [`try_resolve`] to
/// detect that case.
///
/// # Examples
/// ```
/// use logo_extract::url_utils::resolve;
///
/// assert_eq!(resolve("https://x.com/page", "//cdn.x.com/logo.png"), "https://cdn.x.com/logo.png");
/// assert_eq!(resolve("https://x.com/page", "/logo.png"), "https://x.com/logo.png");
/// assert_eq!(resolve("https://x.com/", "logo.png"), "https://x.com/logo.png");
/// ```
#[must_use]
pub fn resolve(page_url: &str, raw_url: &str) -> String {
    let raw_url = raw_url.trim();

    if is_valid_absolute_url(raw_url) || raw_url.starts_with("data:") {
        return raw_url.to_string();
    }

    if raw_url.starts_with("//") {
        let (scheme, _) = scheme_and_host(page_url);
        return format!("{scheme}:{raw_url}");
    }

    if raw_url.starts_with('/') {
        let (scheme, host) = scheme_and_host(page_url);
        return format!("{scheme}://{host}{raw_url}");
    }

    format!("{page_url}{raw_url}")
}

/// Like [`resolve`], but fails when the page URL is needed and unusable.
///
/// Only protocol-relative and root-relative references consult the page
/// URL's scheme and host, so only those can fail.
pub fn try_resolve(page_url: &str, raw_url: &str) -> Result<String> {
    let raw_url = raw_url.trim();
    let needs_scheme = !is_valid_absolute_url(raw_url)
        && !raw_url.starts_with("data:")
        && raw_url.starts_with('/');

    if needs_scheme {
        let (scheme, host) = scheme_and_host(page_url);
        let needs_host = !raw_url.starts_with("//");
        if scheme.is_empty() || (needs_host && host.is_empty()) {
            return Err(Error::InvalidPageUrl(page_url.to_string()));
        }
    }

    Ok(resolve(page_url, raw_url))
}
