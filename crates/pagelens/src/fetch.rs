//! Page retrieval.
//!
//! The analyzer only needs "URL in, markup out". [`PageSource`] is that seam;
//! [`HttpFetcher`] is the reqwest-backed implementation. No retries are
//! attempted here: a non-success status ends the call.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::types::{LensError, LensResult};

/// Default request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Maximum number of redirects followed per request.
const MAX_REDIRECTS: usize = 5;

/// Anything that can turn a URL into page markup.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body of `url` as text.
    async fn fetch(&self, url: &str) -> LensResult<String>;
}

/// Check that `raw` is an absolute http(s) URL.
pub fn validate_url(raw: &str) -> LensResult<Url> {
    let parsed = Url::parse(raw.trim()).map_err(|e| LensError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(LensError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// HTTP GET page source.
///
/// Cloning is cheap and clones share one connection pool, so a single
/// fetcher can serve any number of concurrent analyses.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given timeout and user agent.
    pub fn new(timeout_ms: u64, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Default user agent string: `pagelens/<version>`.
    pub fn default_user_agent() -> String {
        format!("pagelens/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_MS, &Self::default_user_agent())
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> LensResult<String> {
        let target = validate_url(url)?;

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| LensError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Page retrieval failed");
            return Err(LensError::Retrieval {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| LensError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(url, bytes = body.len(), "Fetched page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("https://example.com/a?b=c").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_other_inputs() {
        assert!(matches!(
            validate_url("not a url"),
            Err(LensError::InvalidUrl { .. })
        ));
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(LensError::InvalidUrl { .. })
        ));
        assert!(matches!(validate_url(""), Err(LensError::InvalidUrl { .. })));
    }

    #[test]
    fn test_default_user_agent() {
        assert!(HttpFetcher::default_user_agent().starts_with("pagelens/"));
    }
}
