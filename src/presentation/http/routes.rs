//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, patch},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/admin", admin_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Admin API routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .merge(place_routes())
        .merge(playlist_routes())
        .merge(user_routes())
        .merge(dashboard_routes())
        .merge(moderation_routes())
}

fn place_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/places",
            get(handlers::place::list_places).post(handlers::place::create_place),
        )
        .route(
            "/places/{place_id}",
            get(handlers::place::get_place)
                .put(handlers::place::update_place)
                .delete(handlers::place::delete_place),
        )
}

fn playlist_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/playlists",
            get(handlers::playlist::list_playlists).post(handlers::playlist::create_playlist),
        )
        .route(
            "/playlists/{playlist_id}",
            patch(handlers::playlist::update_playlist_status),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route(
            "/users/{user_id}",
            get(handlers::user::get_user)
                .patch(handlers::user::update_user_status)
                .delete(handlers::user::delete_user),
        )
}

fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(handlers::dashboard::get_stats))
        .route("/dashboard/activity", get(handlers::dashboard::get_activity))
}

fn moderation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/moderation/reviews",
            get(handlers::moderation::list_pending_reviews),
        )
        .route(
            "/moderation/reviews/{review_id}",
            patch(handlers::moderation::moderate_review),
        )
        .route(
            "/moderation/photos",
            get(handlers::moderation::list_pending_photos),
        )
        .route(
            "/moderation/photos/{photo_id}",
            patch(handlers::moderation::moderate_photo),
        )
}
