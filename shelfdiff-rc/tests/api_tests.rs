//! Integration tests for the shelfdiff-rc router
//!
//! `/process` needs live upstreams, so these cover routing, the health
//! contract, and error shape; the pipeline itself is covered by
//! engine_tests.rs and the service unit tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use shelfdiff_common::Settings;
use shelfdiff_rc::{build_router, AppState};
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: app with default settings (no artifacts, default URLs)
fn setup_app() -> axum::Router {
    let state = AppState::new(Settings::default()).expect("state should build");
    build_router(state)
}

fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

#[tokio::test]
async fn health_endpoint_reports_module_metadata() {
    let app = setup_app();

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "shelfdiff-rc");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = setup_app();

    let response = app.oneshot(test_request("GET", "/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn process_with_unreachable_upstream_maps_to_bad_gateway() {
    // Point the stock feed at a closed port; the fetch error must surface
    // as 502 with the JSON error body, not a panic or a 200
    let mut settings = Settings::default();
    settings.stock_feed.url = "http://127.0.0.1:9/feed.xlsx".to_string();
    settings.stock_feed.timeout_secs = 1;
    settings.catalog.url = "http://127.0.0.1:9/items".to_string();
    settings.catalog.timeout_secs = 1;

    let state = AppState::new(settings).expect("state should build");
    let app = build_router(state);

    let response = app.oneshot(test_request("GET", "/process")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    assert!(body["error"]["message"].is_string());
}
