//! Retrieval plus scoring for a single URL.

use std::sync::Arc;

use crate::accessibility::analyze_accessibility;
use crate::density::analyze_density;
use crate::fetch::{HttpFetcher, PageSource};
use crate::types::{AccessibilityMetrics, DensityMetrics, LensResult, PageReport};

/// Fetches a page once and runs one or both scorers on the markup.
///
/// If retrieval fails the scorers never run and the error is returned as is.
#[derive(Clone)]
pub struct PageAnalyzer {
    source: Arc<dyn PageSource>,
}

impl PageAnalyzer {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self { source }
    }

    /// Analyzer backed by an [`HttpFetcher`].
    pub fn http(timeout_ms: u64, user_agent: &str) -> Self {
        Self::new(Arc::new(HttpFetcher::new(timeout_ms, user_agent)))
    }

    pub async fn density(&self, url: &str) -> LensResult<DensityMetrics> {
        let markup = self.source.fetch(url).await?;
        Ok(analyze_density(url, &markup))
    }

    pub async fn accessibility(&self, url: &str) -> LensResult<AccessibilityMetrics> {
        let markup = self.source.fetch(url).await?;
        Ok(analyze_accessibility(url, &markup))
    }

    /// Both metric sets from a single retrieval.
    pub async fn report(&self, url: &str) -> LensResult<PageReport> {
        let markup = self.source.fetch(url).await?;
        Ok(report_for_markup(url, &markup))
    }
}

/// Score markup that is already in hand.
pub fn report_for_markup(url: &str, markup: &str) -> PageReport {
    PageReport {
        url: url.to_string(),
        density: analyze_density(url, markup),
        accessibility: analyze_accessibility(url, markup),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LensError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticPage {
        body: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PageSource for StaticPage {
        async fn fetch(&self, _url: &str) -> LensResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.to_string())
        }
    }

    struct Failing(u16);

    #[async_trait]
    impl PageSource for Failing {
        async fn fetch(&self, url: &str) -> LensResult<String> {
            Err(LensError::Retrieval {
                url: url.to_string(),
                status: self.0,
            })
        }
    }

    #[tokio::test]
    async fn test_report_fetches_once() {
        let page = Arc::new(StaticPage {
            body: "<h1>T</h1><p>a b</p><img alt=x>",
            calls: AtomicUsize::new(0),
        });
        let analyzer = PageAnalyzer::new(page.clone());

        let report = analyzer.report("https://example.com").await.unwrap();
        assert_eq!(page.calls.load(Ordering::SeqCst), 1);
        assert_eq!(report.density.scanability_score, 100);
        assert_eq!(report.accessibility.accessibility_score, 100);
        assert_eq!(report.url, "https://example.com");
    }

    #[tokio::test]
    async fn test_retrieval_failure_is_surfaced() {
        let analyzer = PageAnalyzer::new(Arc::new(Failing(503)));
        let err = analyzer.density("https://example.com").await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        let err = analyzer.accessibility("https://example.com").await.unwrap_err();
        assert_eq!(err.status(), Some(503));
    }
}
