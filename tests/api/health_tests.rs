//! Health and Metrics API Tests

use axum::http::StatusCode;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
    assert_eq!(body["subscribers"], 0);
}

#[tokio::test]
async fn test_metrics_exposes_request_counts() {
    let app = TestApp::new();
    app.get("/getUser/nobody").await;

    let (status, body) = app.get("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    let text = body.as_str().expect("metrics are plain text");
    assert!(text.contains("chat_backend_http_requests_total"));
    assert!(text.contains("path=\"/getUser/{handle}\""));
    assert!(text.contains("chat_backend_service_failures_total"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let (status, _) = app.get("/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
