//! Demo Data Seeding Tests

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use travel_admin::infrastructure::database::{seed_demo_data, seed_if_empty};

use crate::common::TestApp;

#[tokio::test]
async fn test_seed_populates_dashboard() {
    let app = TestApp::new();

    let report = seed_if_empty(&app.repos).await;
    assert!(!report.is_empty());

    let stats: Value = app.server.get("/api/admin/dashboard/stats").await.json();
    assert_eq!(
        stats,
        json!({
            "totalTrips": report.trips,
            "totalPlaylists": report.playlists,
            "totalPlaces": report.places,
            "activeUsers": 3,
            "pendingReviews": 1
        })
    );

    let photos: Vec<Value> = app.server.get("/api/admin/moderation/photos").await.json();
    assert_eq!(photos.len(), report.photos);
}

#[tokio::test]
async fn test_seed_skipped_when_users_exist() {
    let app = TestApp::new();
    app.create_user("active").await;

    let report = seed_demo_data(&app.repos).await.unwrap();

    assert!(report.is_empty());
    let places: Vec<Value> = app.server.get("/api/admin/places").await.json();
    assert!(places.is_empty());
}

#[tokio::test]
async fn test_seed_runs_once() {
    let app = TestApp::new();

    let first = seed_demo_data(&app.repos).await.unwrap();
    let second = seed_demo_data(&app.repos).await.unwrap();

    assert_eq!(first.users, 4);
    assert!(second.is_empty());
    let users: Vec<Value> = app.server.get("/api/admin/users").await.json();
    assert_eq!(users.len(), 4);
}
