//! Dashboard API Tests

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use travel_admin::domain::{ModerationStatus, NewReview, NewTrip, TripStatus};

use crate::common::TestApp;

#[tokio::test]
async fn test_stats_on_empty_store() {
    let app = TestApp::new();

    let response = app.server.get("/api/admin/dashboard/stats").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "totalTrips": 0,
            "totalPlaylists": 0,
            "totalPlaces": 0,
            "activeUsers": 0,
            "pendingReviews": 0
        })
    );
}

#[tokio::test]
async fn test_active_users_excludes_disabled() {
    let app = TestApp::new();
    app.create_user("active").await;
    app.create_user("disabled").await;

    let stats: Value = app.server.get("/api/admin/dashboard/stats").await.json();

    assert_eq!(stats["activeUsers"], 1);
}

#[tokio::test]
async fn test_stats_count_each_table() {
    let app = TestApp::new();
    app.create_place("Sintra").await;
    app.create_place("Cascais").await;
    for status in [TripStatus::Planned, TripStatus::Completed] {
        app.repos
            .trips
            .create(NewTrip {
                user_id: 1,
                destination: "Porto".into(),
                status,
            })
            .await
            .unwrap();
    }
    for status in [ModerationStatus::Pending, ModerationStatus::Rejected] {
        app.repos
            .reviews
            .create(NewReview {
                user_id: 1,
                user_name: "Alice".into(),
                place_id: 1,
                place_name: "Sintra".into(),
                content: "Foggy but lovely".into(),
                rating: 4,
                status,
            })
            .await
            .unwrap();
    }

    let stats: Value = app.server.get("/api/admin/dashboard/stats").await.json();

    assert_eq!(stats["totalPlaces"], 2);
    assert_eq!(stats["totalTrips"], 2);
    assert_eq!(stats["totalPlaylists"], 0);
    assert_eq!(stats["pendingReviews"], 1);
}

#[tokio::test]
async fn test_activity_series_shape() {
    let app = TestApp::new();

    let response = app.server.get("/api/admin/dashboard/activity").await;

    response.assert_status_ok();
    let series: Vec<Value> = response.json();
    let periods: Vec<&str> = series
        .iter()
        .map(|p| p["period"].as_str().unwrap())
        .collect();
    assert_eq!(
        periods,
        vec!["2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06"]
    );
    for point in &series {
        let trips = point["trips"].as_u64().unwrap();
        let playlists = point["playlists"].as_u64().unwrap();
        assert!((10..=59).contains(&trips));
        assert!((5..=24).contains(&playlists));
    }
}
