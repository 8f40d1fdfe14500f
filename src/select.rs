//! Selection Policy
//!
//! Turns the raw rule output into what callers receive: empties dropped,
//! URLs resolved against the page, and either the best image or all of them.

use crate::result::{Candidate, ImageSelection, ResolvedImage};
use crate::url_utils;

/// Drop candidates without a usable url, preserving order.
#[must_use]
pub fn filter_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|c| c.raw_url().is_some())
        .collect()
}

/// Resolve each candidate's url against the page URL.
///
/// Pre-resolved candidates are passed through untouched. Candidates with no
/// usable url are skipped.
#[must_use]
pub fn resolve_candidates(page_url: &str, candidates: Vec<Candidate>) -> Vec<ResolvedImage> {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let raw = candidate.raw_url()?;
            let url = if candidate.data {
                raw.to_string()
            } else {
                url_utils::resolve(page_url, raw)
            };
            Some(ResolvedImage {
                kind: candidate.kind,
                url,
                size: candidate.size,
            })
        })
        .collect()
}

/// Filter, resolve, and pick.
///
/// With `return_all` the full ordered list is returned (possibly empty);
/// otherwise only its first element.
#[must_use]
pub fn select(page_url: &str, candidates: Vec<Candidate>, return_all: bool) -> ImageSelection {
    let surviving = filter_candidates(candidates);
    let images = resolve_candidates(page_url, surviving);

    tracing::debug!(
        page_url,
        found = images.len(),
        best = images.first().map(|i| i.kind.as_str()),
        "image candidates resolved"
    );

    if return_all {
        ImageSelection::All(images)
    } else {
        ImageSelection::One(images.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::RuleKind;

    fn candidate(kind: RuleKind, url: Option<&str>) -> Candidate {
        Candidate::new(kind, url.map(str::to_string))
    }

    #[test]
    fn test_filter_drops_empty_and_blank() {
        let candidates = vec![
            candidate(RuleKind::OgLogo, None),
            candidate(RuleKind::MetaItempropLogo, Some("")),
            candidate(RuleKind::LinkRelIcon, Some("   ")),
            candidate(RuleKind::OgImage, Some("/og.png")),
        ];

        let kept = filter_candidates(candidates);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].kind, RuleKind::OgImage);
    }

    #[test]
    fn test_resolve_skips_pre_resolved() {
        let candidates = vec![
            candidate(RuleKind::LinkRelIcon, Some("/favicon.ico")).with_size(Some("16x16".into())),
            candidate(RuleKind::SvgImage, Some("inline-payload")).pre_resolved(),
        ];

        let images = resolve_candidates("https://example.com/page", candidates);
        assert_eq!(images[0].url, "https://example.com/favicon.ico");
        assert_eq!(images[0].size.as_deref(), Some("16x16"));
        assert_eq!(images[1].url, "inline-payload");
    }

    #[test]
    fn test_data_uri_never_rewritten() {
        let data = "data:image/png;base64,AAAA";
        let images = resolve_candidates("not a url", vec![candidate(RuleKind::OgImage, Some(data))]);
        assert_eq!(images[0].url, data);
    }

    #[test]
    fn test_select_single_is_first_of_all() {
        let make = || {
            vec![
                candidate(RuleKind::OgLogo, None),
                candidate(RuleKind::LinkRelIcon, Some("/a.ico")),
                candidate(RuleKind::OgImage, Some("https://cdn.example.com/og.png")),
            ]
        };

        let all = select("https://example.com/", make(), true);
        let one = select("https://example.com/", make(), false);

        assert_eq!(all.first(), one.first());
        assert_eq!(all.into_vec().len(), 2);
        assert_eq!(
            one.first().map(|i| i.url.as_str()),
            Some("https://example.com/a.ico")
        );
    }

    #[test]
    fn test_select_nothing() {
        assert_eq!(select("https://example.com/", Vec::new(), false), ImageSelection::One(None));
        assert_eq!(select("https://example.com/", Vec::new(), true), ImageSelection::All(Vec::new()));
    }
}
