//! Logo Extraction Rules
//!
//! Each rule looks for one HTML convention that sites use to advertise their
//! logo or icon. [`RULES`] lists them from most to least reliable; that order
//! is the ranking of the final result and must not change between runs.
//!
//! Rules may yield candidates with an absent url (matching element, missing
//! attribute). Those are dropped by [`crate::select`] before resolution.

use dom_query::Document;

use crate::dom;
use crate::helpers::{json_ld, svg};
use crate::result::{Candidate, RuleKind};

/// One extraction strategy: a stable identifier plus a pure function over
/// the parsed document.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Identifier attached to every candidate this rule produces.
    pub kind: RuleKind,

    /// Candidates in document order.
    pub extract: fn(&Document) -> Vec<Candidate>,
}

impl Rule {
    /// Run the rule against a document.
    #[must_use]
    pub fn apply(&self, doc: &Document) -> Vec<Candidate> {
        (self.extract)(doc)
    }
}

/// All rules, highest priority first.
pub const RULES: &[Rule] = &[
    Rule { kind: RuleKind::OgLogo, extract: og_logo },
    Rule { kind: RuleKind::MetaItempropLogo, extract: meta_itemprop_logo },
    Rule { kind: RuleKind::LinkRelIcon, extract: link_rel_icons },
    Rule { kind: RuleKind::ImgItempropLogo, extract: img_itemprop_logo },
    Rule { kind: RuleKind::MsApplicationTileImage, extract: ms_tile_image },
    Rule { kind: RuleKind::MetaContentLogo, extract: meta_content_logo },
    Rule { kind: RuleKind::MetaContentImage, extract: meta_itemprop_image },
    Rule { kind: RuleKind::JsonLdLogo, extract: json_ld_blocks },
    Rule { kind: RuleKind::ImgAltLogo, extract: img_alt_logo },
    Rule { kind: RuleKind::ImgClassLogo, extract: img_class_logo },
    Rule { kind: RuleKind::ImgSrcLogo, extract: img_src_logo },
    Rule { kind: RuleKind::OgImage, extract: og_image },
    Rule { kind: RuleKind::SvgImage, extract: inline_svg_logo },
];

/// Rule identifiers in evaluation order.
#[must_use]
pub fn rule_order() -> Vec<RuleKind> {
    RULES.iter().map(|rule| rule.kind).collect()
}

/// Run every rule in priority order and concatenate the results.
///
/// Empty candidates are kept; filtering is a separate pass.
#[must_use]
pub fn collect_candidates(doc: &Document) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for rule in RULES {
        let found = rule.apply(doc);
        tracing::trace!(rule = %rule.kind, count = found.len(), "rule evaluated");
        candidates.extend(found);
    }

    candidates
}

/// Attribute of the first element matching `selector`, as at most one candidate.
///
/// A first match without the attribute yields nothing; later matches are not consulted.
fn first_match(doc: &Document, kind: RuleKind, selector: &str, attr: &str) -> Vec<Candidate> {
    dom::first_attribute(doc, selector, attr)
        .map(|url| Candidate::new(kind, Some(url)))
        .into_iter()
        .collect()
}

// === Single-match rules ===

fn og_logo(doc: &Document) -> Vec<Candidate> {
    first_match(doc, RuleKind::OgLogo, r#"meta[property="og:logo"]"#, "content")
}

fn meta_itemprop_logo(doc: &Document) -> Vec<Candidate> {
    first_match(doc, RuleKind::MetaItempropLogo, r#"meta[itemprop="logo"]"#, "content")
}

fn img_itemprop_logo(doc: &Document) -> Vec<Candidate> {
    first_match(doc, RuleKind::ImgItempropLogo, r#"img[itemprop="logo"]"#, "src")
}

fn ms_tile_image(doc: &Document) -> Vec<Candidate> {
    first_match(
        doc,
        RuleKind::MsApplicationTileImage,
        r#"meta[name*="msapplication-TileImage"]"#,
        "content",
    )
}

fn meta_content_logo(doc: &Document) -> Vec<Candidate> {
    first_match(doc, RuleKind::MetaContentLogo, r#"meta[content*="logo"]"#, "content")
}

fn meta_itemprop_image(doc: &Document) -> Vec<Candidate> {
    first_match(doc, RuleKind::MetaContentImage, r#"meta[itemprop*="image"]"#, "content")
}

fn img_alt_logo(doc: &Document) -> Vec<Candidate> {
    first_match(doc, RuleKind::ImgAltLogo, r#"img[alt*="logo"]"#, "src")
}

fn img_class_logo(doc: &Document) -> Vec<Candidate> {
    first_match(doc, RuleKind::ImgClassLogo, r#"img[class*="logo"]"#, "src")
}

fn img_src_logo(doc: &Document) -> Vec<Candidate> {
    first_match(doc, RuleKind::ImgSrcLogo, r#"img[src*="logo"]"#, "src")
}

fn og_image(doc: &Document) -> Vec<Candidate> {
    first_match(doc, RuleKind::OgImage, r#"meta[property="og:image"]"#, "content")
}

// === Multi-match rules ===

/// Every icon link (`icon`, `shortcut icon`, `apple-touch-icon`, ...).
fn link_rel_icons(doc: &Document) -> Vec<Candidate> {
    dom::all_matches(doc, r#"link[rel*="icon"]"#)
        .iter()
        .map(|link| {
            Candidate::new(RuleKind::LinkRelIcon, dom::get_attribute(link, "href"))
                .with_size(dom::get_attribute(link, "sizes"))
        })
        .collect()
}

/// One candidate per structured-data block, malformed blocks included.
fn json_ld_blocks(doc: &Document) -> Vec<Candidate> {
    dom::all_matches(doc, r#"script[type*="application/ld+json"]"#)
        .iter()
        .map(|script| {
            let text = dom::text_content(script);
            Candidate::new(RuleKind::JsonLdLogo, json_ld::extract_image(&text))
        })
        .collect()
}

// === Pre-resolved rules ===

fn inline_svg_logo(doc: &Document) -> Vec<Candidate> {
    dom::first_match(doc, r#"a[class*="logo"]"#)
        .map(|anchor| {
            let markup = dom::inner_html(&anchor);
            Candidate::new(RuleKind::SvgImage, svg::to_data_uri(Some(&*markup))).pre_resolved()
        })
        .into_iter()
        .collect()
}
