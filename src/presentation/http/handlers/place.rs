//! Place Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{normalize_place_body, CreatePlaceRequest, UpdatePlaceRequest};
use crate::domain::Place;
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::handlers::parse_id;
use crate::shared::error::AppError;
use crate::shared::validation::parse_and_validate;
use crate::startup::AppState;

/// List all places, newest first
pub async fn list_places(State(state): State<AppState>) -> Result<Json<Vec<Place>>, AppError> {
    let places = state.repos.places.find_all().await?;
    Ok(Json(places))
}

/// Get place by ID
pub async fn get_place(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<Place>, AppError> {
    let place_id = parse_id(&place_id, "place")?;

    let place = state
        .repos
        .places
        .find_by_id(place_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Place not found".into()))?;

    Ok(Json(place))
}

/// Create a new place
pub async fn create_place(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Place>), AppError> {
    let request: CreatePlaceRequest = parse_and_validate(normalize_place_body(body))?;

    let place = state.repos.places.create(request.into()).await?;
    tracing::info!(place_id = place.id, name = %place.name, "Place created");

    Ok((StatusCode::CREATED, Json(place)))
}

/// Merge the supplied fields into an existing place
pub async fn update_place(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Place>, AppError> {
    let place_id = parse_id(&place_id, "place")?;
    let request: UpdatePlaceRequest = parse_and_validate(normalize_place_body(body))?;

    let place = state
        .repos
        .places
        .update(place_id, request.into())
        .await?
        .ok_or_else(|| AppError::NotFound("Place not found".into()))?;

    Ok(Json(place))
}

/// Delete a place. Missing IDs are not an error.
pub async fn delete_place(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let place_id = parse_id(&place_id, "place")?;

    state.repos.places.delete(place_id).await?;
    tracing::info!(place_id, "Place deleted");

    Ok(StatusCode::NO_CONTENT)
}
