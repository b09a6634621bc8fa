//! User API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use travel_admin::shared::error::ErrorResponse;

use crate::common::TestApp;

#[tokio::test]
async fn test_create_user_defaults() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/admin/users")
        .json(&json!({ "name": "Eva Costa", "email": "eva@example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let user: Value = response.json();
    assert_eq!(user["role"], "user");
    assert_eq!(user["status"], "active");
    assert!(user["joinedAt"].is_string());
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::new();
    let created = app.create_user("inactive").await;

    let response = app
        .server
        .get(&format!("/api/admin/users/{}", created["id"]))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_list_users() {
    let app = TestApp::new();
    app.create_user("active").await;
    app.create_user("disabled").await;

    let response = app.server.get("/api/admin/users").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 2);
}

#[test_case("active" ; "activate")]
#[test_case("inactive" ; "deactivate")]
#[test_case("disabled" ; "disable")]
#[tokio::test]
async fn test_update_user_status(status: &str) {
    let app = TestApp::new();
    let created = app.create_user("active").await;

    let response = app
        .server
        .patch(&format!("/api/admin/users/{}", created["id"]))
        .json(&json!({ "status": status }))
        .await;

    response.assert_status_ok();
    let user: Value = response.json();
    assert_eq!(user["status"], status);
    assert_eq!(user["name"], created["name"]);
    assert_eq!(user["email"], created["email"]);
}

#[tokio::test]
async fn test_update_user_unknown_status_rejected() {
    let app = TestApp::new();
    let created = app.create_user("active").await;

    let response = app
        .server
        .patch(&format!("/api/admin/users/{}", created["id"]))
        .json(&json!({ "status": "banned" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorResponse>().code, 10007);
}

#[tokio::test]
async fn test_update_missing_user_returns_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .patch("/api/admin/users/77")
        .json(&json!({ "status": "disabled" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<ErrorResponse>().message, "User not found");
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/admin/users")
        .json(&json!({ "name": "Nobody", "email": "not-an-email" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>().message,
        "Invalid email format"
    );
}

#[tokio::test]
async fn test_delete_user_twice() {
    let app = TestApp::new();
    let created = app.create_user("active").await;
    let path = format!("/api/admin/users/{}", created["id"]);

    app.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .get(&path)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_user_id() {
    let app = TestApp::new();

    let response = app.server.delete("/api/admin/users/not-a-number").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorResponse>().message, "Invalid user ID");
}
