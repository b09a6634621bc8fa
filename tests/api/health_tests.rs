//! Health Check API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{StaticProbe, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_liveness() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_with_reachable_store() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_with_unreachable_store() {
    let app = TestApp::with_probe(StaticProbe { reachable: false });

    let response = app.server.get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "unhealthy");
    assert!(body["database"]["message"].is_string());
}

#[tokio::test]
async fn test_metrics_endpoint_reports_requests() {
    let app = TestApp::new();
    app.server.get("/api/admin/places").await.assert_status_ok();

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    assert!(response.text().contains("travel_admin_http_requests_total"));
}
