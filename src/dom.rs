//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate so the extraction rules read as
//! "select, then read an attribute" without repeating node plumbing.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Attribute of the first element matching `selector`.
///
/// Returns `None` when nothing matches or the first match lacks the attribute.
/// Later matches are not consulted.
#[must_use]
pub fn first_attribute(doc: &Document, selector: &str, name: &str) -> Option<String> {
    first_match(doc, selector).and_then(|sel| get_attribute(&sel, name))
}

// === Selection ===

/// First element matching `selector`, if any.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// Every element matching `selector`, each as its own selection, in document order.
#[must_use]
pub fn all_matches<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}
