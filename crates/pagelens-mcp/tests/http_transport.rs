//! HTTP transport: bearer auth on `/mcp`, open `/health`.

#![cfg(feature = "sse")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use pagelens::PageAnalyzer;
use pagelens_mcp::protocol::ProtocolHandler;
use pagelens_mcp::transport::SseTransport;

const TOKEN: &str = "tok";

fn router(token: Option<&str>) -> axum::Router {
    let handler = ProtocolHandler::new(PageAnalyzer::http(5_000, "pagelens-mcp-test"));
    SseTransport::new(handler, token.map(str::to_string)).router()
}

fn ping_request(auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    let body = json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" });
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let response = router(Some(TOKEN)).oneshot(ping_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = read_json(response).await;
    assert_eq!(body["error"]["code"], -32900);
}

#[tokio::test]
async fn test_wrong_token_is_rejected() {
    let response = router(Some(TOKEN))
        .oneshot(ping_request(Some("Bearer nope")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(response).await["error"]["code"], -32900);
}

#[tokio::test]
async fn test_valid_token_answers_ping() {
    let response = router(Some(TOKEN))
        .oneshot(ping_request(Some("Bearer tok")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_no_token_configured_allows_requests() {
    let response = router(None).oneshot(ping_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_bypasses_auth() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router(Some(TOKEN)).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
}
