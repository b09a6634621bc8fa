//! Moderation Handlers
//!
//! Pending review/photo queues and their status transitions.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::UpdateStatusRequest;
use crate::application::services::ModerationService;
use crate::domain::{ModerationStatus, Photo, Review};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::handlers::parse_id;
use crate::shared::error::AppError;
use crate::shared::validation::parse_body;
use crate::startup::AppState;

pub async fn list_pending_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = ModerationService::new(&state.repos).pending_reviews().await?;
    Ok(Json(reviews))
}

pub async fn moderate_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Review>, AppError> {
    let review_id = parse_id(&review_id, "review")?;
    let request: UpdateStatusRequest<ModerationStatus> = parse_body(body)?;

    let review = ModerationService::new(&state.repos)
        .set_review_status(review_id, request.status)
        .await?;

    Ok(Json(review))
}

pub async fn list_pending_photos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Photo>>, AppError> {
    let photos = ModerationService::new(&state.repos).pending_photos().await?;
    Ok(Json(photos))
}

pub async fn moderate_photo(
    State(state): State<AppState>,
    Path(photo_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Photo>, AppError> {
    let photo_id = parse_id(&photo_id, "photo")?;
    let request: UpdateStatusRequest<ModerationStatus> = parse_body(body)?;

    let photo = ModerationService::new(&state.repos)
        .set_photo_status(photo_id, request.status)
        .await?;

    Ok(Json(photo))
}
