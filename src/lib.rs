//! # logo-extract
//!
//! Best-effort logo and favicon discovery for web pages.
//!
//! Given a page URL, this library fetches the page, runs an ordered set of
//! extraction rules over its markup (Open Graph, microdata, icon links,
//! JSON-LD, logo images, inline SVG) and resolves every reference it finds
//! into an absolute URL or a data URI.
//!
//! ## Quick Start
//!
//! ```rust
//! use logo_extract::{extract_images, PageContext};
//!
//! let page = PageContext::new(
//!     "https://example.com/",
//!     r#"<html><head><link rel="icon" href="/favicon.ico" sizes="32x32"></head></html>"#,
//! );
//!
//! let best = extract_images(&page, false);
//! let image = best.first().map(|i| i.url.as_str());
//! assert_eq!(image, Some("https://example.com/favicon.ico"));
//! ```
//!
//! Fetching is async and needs a Tokio runtime:
//!
//! ```no_run
//! # async fn demo() -> logo_extract::Result<()> {
//! let all = logo_extract::find_images("https://example.com", true).await?;
//! for image in all.into_vec() {
//!     println!("{} {}", image.kind, image.url);
//! }
//! # Ok(()) }
//! ```
//!
//! ## Ranking
//!
//! Results come back in rule priority order, see [`rules::RULES`]. The single
//! result mode returns the first element of the full list.

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection for fetched pages.
pub mod encoding;

/// JSON-LD and inline SVG helpers used by the rules.
pub mod helpers;

/// Page loading over HTTP.
pub mod loader;

/// Ordered logo extraction rules.
pub mod rules;

/// Filtering, resolution and selection of candidates.
pub mod select;

/// URL validation and resolution.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use loader::{HttpPageLoader, PageLoader};
pub use options::Options;
pub use result::{Candidate, ImageSelection, PageContext, ResolvedImage, RuleKind};

use dom_query::Document;

/// Fetches a page and returns its best logo, or all candidates in order.
///
/// Uses an [`HttpPageLoader`] with default [`Options`].
///
/// # Errors
///
/// Fails only when the page cannot be fetched. A page with no recognisable
/// logo yields `ImageSelection::One(None)` or an empty `ImageSelection::All`.
pub async fn find_images(url: &str, show_all_images: bool) -> Result<ImageSelection> {
    let options = Options {
        show_all_images,
        ..Options::default()
    };
    find_images_with_options(url, &options).await
}

/// Fetches a page with custom fetch settings.
///
/// # Example
///
/// ```no_run
/// use logo_extract::{find_images_with_options, Options};
/// use std::time::Duration;
///
/// # async fn demo() -> logo_extract::Result<()> {
/// let options = Options::default().with_timeout(Duration::from_secs(3));
/// let best = find_images_with_options("https://example.com", &options).await?;
/// # Ok(()) }
/// ```
pub async fn find_images_with_options(url: &str, options: &Options) -> Result<ImageSelection> {
    let loader = HttpPageLoader::new(options)?;
    find_images_with_loader(&loader, url, options.show_all_images).await
}

/// Fetches a page through a caller-supplied [`PageLoader`].
#[tracing::instrument(skip(loader), fields(final_url = tracing::field::Empty))]
pub async fn find_images_with_loader(
    loader: &dyn PageLoader,
    url: &str,
    show_all_images: bool,
) -> Result<ImageSelection> {
    let page = loader.fetch(url).await?;
    tracing::Span::current().record("final_url", page.final_url.as_str());
    Ok(extract_images(&page, show_all_images))
}

/// Runs the extraction pipeline on an already fetched page.
///
/// Pure and synchronous: parse, run the rules, drop empties, resolve, pick.
#[must_use]
pub fn extract_images(page: &PageContext, show_all_images: bool) -> ImageSelection {
    let doc = Document::from(page.html.as_str());
    let candidates = rules::collect_candidates(&doc);
    select::select(&page.final_url, candidates, show_all_images)
}

/// Like [`extract_images`], for a raw body whose charset is not yet known.
///
/// # Example
///
/// ```rust
/// use logo_extract::extract_images_bytes;
///
/// let body = b"<html><head><meta charset=\"windows-1252\"><meta property=\"og:logo\" content=\"/l\xF6go.png\"></head></html>";
/// let best = extract_images_bytes("https://example.com", body, false);
/// assert_eq!(best.first().map(|i| i.url.as_str()), Some("https://example.com/l\u{f6}go.png"));
/// ```
#[must_use]
pub fn extract_images_bytes(final_url: &str, body: &[u8], show_all_images: bool) -> ImageSelection {
    let page = PageContext::new(final_url, encoding::decode_page(body, None));
    extract_images(&page, show_all_images)
}
