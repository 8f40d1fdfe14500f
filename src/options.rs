//! Configuration options for image discovery.
//!
//! The `Options` struct controls how pages are fetched and whether the full
//! ranked list or only the best candidate is returned.

use std::time::Duration;

/// Default user agent sent by [`crate::loader::HttpPageLoader`].
pub const DEFAULT_USER_AGENT: &str = concat!("logo-extract/", env!("CARGO_PKG_VERSION"));

/// Configuration options for image discovery.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use logo_extract::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     show_all_images: true,
///     timeout: Duration::from_secs(5),
///     ..Options::default()
/// };
/// assert_eq!(options.max_redirects, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Return every candidate in priority order instead of only the best.
    ///
    /// Default: `false`
    pub show_all_images: bool,

    /// Total time allowed for fetching the page, redirects included.
    ///
    /// Default: 15 seconds
    pub timeout: Duration,

    /// Time allowed for establishing a connection.
    ///
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Maximum number of redirects followed before giving up.
    ///
    /// Default: `10`
    pub max_redirects: usize,

    /// `User-Agent` header sent with the page request.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_all_images: false,
            timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(5),
            max_redirects: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Options {
    /// Override whether all images are returned.
    #[must_use]
    pub fn with_show_all_images(mut self, show_all: bool) -> Self {
        self.show_all_images = show_all;
        self
    }

    /// Override the fetch timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the redirect limit.
    #[must_use]
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
