//! Moderation API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use travel_admin::domain::{ModerationStatus, NewPhoto, NewReview};
use travel_admin::shared::error::ErrorResponse;

use crate::common::TestApp;

async fn add_review(app: &TestApp, status: ModerationStatus) -> i64 {
    app.repos
        .reviews
        .create(NewReview {
            user_id: 2,
            user_name: "Bruno Silva".into(),
            place_id: 1,
            place_name: "Belem Tower".into(),
            content: "Long queue, worth it".into(),
            rating: 4,
            status,
        })
        .await
        .unwrap()
        .id
}

async fn add_photo(app: &TestApp, status: ModerationStatus) -> i64 {
    app.repos
        .photos
        .create(NewPhoto {
            uploader_id: 3,
            uploader_name: "Chen Wei".into(),
            url: "https://images.example.com/tower.jpg".into(),
            caption: Some("Sunset".into()),
            related_type: "place".into(),
            related_id: Some(1),
            status,
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_pending_reviews_only() {
    let app = TestApp::new();
    let pending = add_review(&app, ModerationStatus::Pending).await;
    add_review(&app, ModerationStatus::Approved).await;

    let reviews: Vec<Value> = app.server.get("/api/admin/moderation/reviews").await.json();

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["id"], pending);
    assert_eq!(reviews[0]["status"], "pending");
}

#[tokio::test]
async fn test_approved_review_leaves_queue() {
    let app = TestApp::new();
    let id = add_review(&app, ModerationStatus::Pending).await;

    let response = app
        .server
        .patch(&format!("/api/admin/moderation/reviews/{}", id))
        .json(&json!({ "status": "approved" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "approved");

    let reviews: Vec<Value> = app.server.get("/api/admin/moderation/reviews").await.json();
    assert!(reviews.is_empty());

    let stats: Value = app.server.get("/api/admin/dashboard/stats").await.json();
    assert_eq!(stats["pendingReviews"], 0);
}

#[tokio::test]
async fn test_moderate_missing_review() {
    let app = TestApp::new();

    let response = app
        .server
        .patch("/api/admin/moderation/reviews/404")
        .json(&json!({ "status": "rejected" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorResponse>().message,
        "Review with id 404 not found"
    );
}

#[tokio::test]
async fn test_rejected_photo_leaves_queue() {
    let app = TestApp::new();
    let id = add_photo(&app, ModerationStatus::Pending).await;
    add_photo(&app, ModerationStatus::Pending).await;

    let response = app
        .server
        .patch(&format!("/api/admin/moderation/photos/{}", id))
        .json(&json!({ "status": "rejected" }))
        .await;

    response.assert_status_ok();
    let photos: Vec<Value> = app.server.get("/api/admin/moderation/photos").await.json();
    assert_eq!(photos.len(), 1);
    assert_ne!(photos[0]["id"], id);
}

#[tokio::test]
async fn test_unknown_moderation_status_rejected() {
    let app = TestApp::new();
    let id = add_photo(&app, ModerationStatus::Pending).await;

    let response = app
        .server
        .patch(&format!("/api/admin/moderation/photos/{}", id))
        .json(&json!({ "status": "flagged" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_photo_id() {
    let app = TestApp::new();

    let response = app
        .server
        .patch("/api/admin/moderation/photos/x1")
        .json(&json!({ "status": "approved" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorResponse>().message, "Invalid photo ID");
}
