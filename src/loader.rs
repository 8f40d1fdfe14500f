//! Page loading.
//!
//! [`PageLoader`] is the seam between the network and the extraction
//! pipeline. [`HttpPageLoader`] is the default implementation: one GET,
//! redirects followed, body decoded to UTF-8, final URL reported.
//!
//! Timeouts, redirect limits and the user agent live here; the pipeline
//! itself never waits on anything.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::{Client, Url};

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::PageContext;

/// Something that can turn a URL into fetched HTML plus its final location.
#[async_trait]
pub trait PageLoader: Send + Sync {
    /// Fetch `url`, following redirects.
    ///
    /// Fails on an unparseable URL, an unreachable host, a timeout, or a
    /// non-2xx status.
    async fn fetch(&self, url: &str) -> Result<PageContext>;
}

/// HTTP page loader backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpPageLoader {
    inner: Client,
}

impl HttpPageLoader {
    /// Build a loader with the fetch settings from `options`.
    pub fn new(options: &Options) -> Result<Self> {
        let inner = Client::builder()
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .redirect(Policy::limited(options.max_redirects))
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Wrap an existing client (shared connection pool, custom TLS, ...).
    #[must_use]
    pub fn with_client(inner: Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PageLoader for HttpPageLoader {
    async fn fetch(&self, url: &str) -> Result<PageContext> {
        let request_url = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;

        tracing::debug!(url = %request_url, "fetching page");

        let response = self
            .inner
            .get(request_url)
            .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let final_url = response.url().to_string();
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(%final_url, status = status.as_u16(), "page returned error status");
            return Err(Error::Status {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        tracing::debug!(%final_url, bytes = body.len(), "page fetched");

        Ok(PageContext {
            html: encoding::decode_page(&body, content_type.as_deref()),
            final_url,
        })
    }
}

