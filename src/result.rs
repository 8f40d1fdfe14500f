//! Result types for image discovery.
//!
//! Candidates are what the extraction rules produce; resolved images are
//! what callers receive once URLs have been made absolute.

use serde::{Serialize, Serializer};

/// Identifier of the rule that produced a candidate.
///
/// The string form returned by [`RuleKind::as_str`] is stable and is what
/// callers use to attribute provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `<meta property="og:logo">`
    OgLogo,
    /// `<meta itemprop="logo">`
    MetaItempropLogo,
    /// `<link rel="icon">` and variants (`shortcut icon`, `apple-touch-icon`)
    LinkRelIcon,
    /// `<img itemprop="logo">`
    ImgItempropLogo,
    /// `<meta name="msapplication-TileImage">`
    MsApplicationTileImage,
    /// `<meta>` whose `content` mentions "logo"
    MetaContentLogo,
    /// `<meta>` whose `itemprop` mentions "image"
    MetaContentImage,
    /// JSON-LD structured data block
    JsonLdLogo,
    /// `<img>` whose alt text mentions "logo"
    ImgAltLogo,
    /// `<img>` whose class mentions "logo"
    ImgClassLogo,
    /// `<img>` whose src mentions "logo"
    ImgSrcLogo,
    /// `<meta property="og:image">`
    OgImage,
    /// Inline `<svg>` inside a logo anchor
    SvgImage,
}

impl RuleKind {
    /// Every rule kind, in priority order.
    pub const ALL: [Self; 13] = [
        Self::OgLogo,
        Self::MetaItempropLogo,
        Self::LinkRelIcon,
        Self::ImgItempropLogo,
        Self::MsApplicationTileImage,
        Self::MetaContentLogo,
        Self::MetaContentImage,
        Self::JsonLdLogo,
        Self::ImgAltLogo,
        Self::ImgClassLogo,
        Self::ImgSrcLogo,
        Self::OgImage,
        Self::SvgImage,
    ];

    /// Stable string identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OgLogo => "og:logo",
            Self::MetaItempropLogo => "meta-itemprop/logo",
            Self::LinkRelIcon => "link-rel/icon",
            Self::ImgItempropLogo => "img-itemprop/logo",
            Self::MsApplicationTileImage => "meta-name/msapplication-TileImage",
            Self::MetaContentLogo => "meta-content/logo",
            Self::MetaContentImage => "meta-content/image",
            Self::JsonLdLogo => "json-ld-logo",
            Self::ImgAltLogo => "img-alt/logo",
            Self::ImgClassLogo => "img-alt/logo-class",
            Self::ImgSrcLogo => "img-src/logo",
            Self::OgImage => "og:image",
            Self::SvgImage => "svg:image",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A raw image reference produced by a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Rule that produced this candidate.
    pub kind: RuleKind,

    /// Raw reference: absolute, relative, data URI, or absent.
    pub url: Option<String>,

    /// Size hint (e.g. the `sizes` attribute of an icon link).
    pub size: Option<String>,

    /// Already resolved; the URL resolver must skip it.
    pub data: bool,
}

impl Candidate {
    /// Candidate with an optional url and no size hint.
    #[must_use]
    pub fn new(kind: RuleKind, url: Option<String>) -> Self {
        Self {
            kind,
            url,
            size: None,
            data: false,
        }
    }

    /// Attach a size hint.
    #[must_use]
    pub fn with_size(mut self, size: Option<String>) -> Self {
        self.size = size;
        self
    }

    /// Mark as pre-resolved.
    #[must_use]
    pub fn pre_resolved(mut self) -> Self {
        self.data = true;
        self
    }

    /// The url with surrounding whitespace removed, if present and not blank.
    #[must_use]
    pub fn raw_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// A candidate whose URL is absolute or a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedImage {
    /// Rule that produced this image.
    #[serde(rename = "type")]
    pub kind: RuleKind,

    /// Absolute URL or data URI.
    pub url: String,

    /// Size hint, if the rule provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// A fetched page: post-redirect URL and its markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// URL of the page after following redirects.
    pub final_url: String,

    /// Raw HTML.
    pub html: String,
}

impl PageContext {
    /// Build a page context from its parts.
    #[must_use]
    pub fn new(final_url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            final_url: final_url.into(),
            html: html.into(),
        }
    }
}

/// Outcome of a discovery call: the best image, or all of them in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ImageSelection {
    /// Highest-priority image, if any rule matched.
    One(Option<ResolvedImage>),
    /// Every resolved image in priority order.
    All(Vec<ResolvedImage>),
}

impl ImageSelection {
    /// The highest-priority image in either mode.
    #[must_use]
    pub fn first(&self) -> Option<&ResolvedImage> {
        match self {
            Self::One(image) => image.as_ref(),
            Self::All(images) => images.first(),
        }
    }

    /// Whether nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    /// Flatten into a list (zero or one element in single mode).
    #[must_use]
    pub fn into_vec(self) -> Vec<ResolvedImage> {
        match self {
            Self::One(image) => image.into_iter().collect(),
            Self::All(images) => images,
        }
    }
}
