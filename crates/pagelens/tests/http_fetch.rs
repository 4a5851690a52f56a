//! Retrieval + scoring against a mock HTTP server.

use std::sync::Arc;

use pagelens::{HttpFetcher, LensError, PageAnalyzer, PageSource};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLEAN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><title>Guide</title></head>
<body>
  <h1>Getting started</h1>
  <p>Install the tool and run it against a page.</p>
  <img src="/shot.png" alt="Screenshot of the report">
  <h2>Options</h2>
  <p>Pass <code>--timeout-ms</code> to bound slow pages.</p>
  <button type="submit">Analyze</button>
</body>
</html>"#;

fn analyzer() -> PageAnalyzer {
    PageAnalyzer::new(Arc::new(HttpFetcher::new(5_000, "pagelens-test")))
}

async fn serve(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_returns_body_on_success() {
    let server = MockServer::start().await;
    serve(&server, "/page", 200, "<p>hi</p>").await;

    let fetcher = HttpFetcher::default();
    let body = fetcher
        .fetch(&format!("{}/page", server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "<p>hi</p>");
}

#[tokio::test]
async fn test_clean_page_scores() {
    let server = MockServer::start().await;
    serve(&server, "/guide", 200, CLEAN_PAGE).await;
    let url = format!("{}/guide", server.uri());

    let density = analyzer().density(&url).await.unwrap();
    assert_eq!(density.url, url);
    assert_eq!(density.word_count, 15);
    assert_eq!(density.image_count, 1);
    assert_eq!(density.heading_count, 2);
    assert_eq!(density.avg_paragraph_length, 8);
    assert_eq!(density.scanability_score, 100);

    let access = analyzer().accessibility(&url).await.unwrap();
    assert_eq!(access.h1_count, 1);
    assert_eq!(access.images_missing_alt, 0);
    assert_eq!(access.unlabeled_buttons, 0);
    assert_eq!(access.heading_order_issues, 0);
    assert_eq!(access.accessibility_score, 100);
}

#[tokio::test]
async fn test_not_found_surfaces_status() {
    let server = MockServer::start().await;
    serve(&server, "/missing", 404, "gone").await;
    let url = format!("{}/missing", server.uri());

    let err = analyzer().density(&url).await.unwrap_err();
    match err {
        LensError::Retrieval { url: failed, status } => {
            assert_eq!(failed, url);
            assert_eq!(status, 404);
        }
        other => panic!("expected retrieval error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = analyzer()
        .accessibility(&format!("{}/flaky", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_invalid_url_is_rejected_before_request() {
    let err = analyzer().report("ftp://example.com/file").await.unwrap_err();
    assert!(matches!(err, LensError::InvalidUrl { .. }));
}

#[tokio::test]
async fn test_concurrent_analyses_share_one_fetcher() {
    let server = MockServer::start().await;
    serve(&server, "/a", 200, "<h1>A</h1><p>one</p>").await;
    serve(&server, "/b", 200, "<h1>B</h1><h1>C</h1>").await;

    let analyzer = analyzer();
    let url_a = format!("{}/a", server.uri());
    let url_b = format!("{}/b", server.uri());
    let (a, b) = tokio::join!(analyzer.report(&url_a), analyzer.report(&url_b));

    let a = a.unwrap();
    let b = b.unwrap();
    assert_eq!(a.accessibility.h1_count, 1);
    assert_eq!(b.accessibility.h1_count, 2);
    assert_eq!(b.accessibility.accessibility_score, 90);
}
