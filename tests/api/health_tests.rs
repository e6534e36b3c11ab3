//! Health and metrics endpoint tests

use axum::http::StatusCode;

use crate::common::TestApp;

#[tokio::test]
async fn health_check_is_public() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
}

#[tokio::test]
async fn liveness_does_not_touch_the_database() {
    let app = TestApp::new().await;

    let response = app.get("/health/live").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "alive");
}

#[tokio::test]
async fn readiness_fails_without_database() {
    let app = TestApp::new().await;

    let response = app.get("/health/ready").await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "unhealthy");
    assert_eq!(response.body["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn metrics_report_matched_routes() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in("leo");
    app.get_auth("/comment/", &token).await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status, StatusCode::OK);
    let text = response.body.as_str().unwrap();
    assert!(text.contains("blog_server_http_requests_total"));
    assert!(text.contains("path=\"/comment/\""));
}
