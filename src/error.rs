//! Error types for logo-extract.
//!
//! Only the page fetch can fail. Everything downstream of a successful fetch
//! degrades to fewer (or no) candidates instead of erroring.

/// Error type for image discovery operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested page URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    /// Network failure, timeout, or redirect limit while fetching the page.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The page responded with a non-success status.
    #[error("server returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Final URL that produced the status.
        url: String,
    },

    /// Scheme or host could not be derived from the page URL during resolution.
    #[error("cannot resolve against page URL: {0}")]
    InvalidPageUrl(String),
}

impl Error {
    /// Whether this error originates from loading the page.
    #[must_use]
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::Client(_) | Self::Fetch(_) | Self::Status { .. }
        )
    }
}

/// Result type alias for image discovery operations.
pub type Result<T> = std::result::Result<T, Error>;
