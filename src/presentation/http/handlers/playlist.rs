//! Playlist Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CreatePlaylistRequest, UpdateStatusRequest};
use crate::domain::{Playlist, PlaylistStatus};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::handlers::parse_id;
use crate::shared::error::AppError;
use crate::shared::validation::{parse_and_validate, parse_body};
use crate::startup::AppState;

pub async fn list_playlists(
    State(state): State<AppState>,
) -> Result<Json<Vec<Playlist>>, AppError> {
    let playlists = state.repos.playlists.find_all().await?;
    Ok(Json(playlists))
}

pub async fn create_playlist(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Playlist>), AppError> {
    let request: CreatePlaylistRequest = parse_and_validate(body)?;

    let playlist = state.repos.playlists.create(request.into()).await?;
    tracing::info!(playlist_id = playlist.id, "Playlist created");

    Ok((StatusCode::CREATED, Json(playlist)))
}

/// Change a playlist's status
pub async fn update_playlist_status(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Playlist>, AppError> {
    let playlist_id = parse_id(&playlist_id, "playlist")?;
    let request: UpdateStatusRequest<PlaylistStatus> = parse_body(body)?;

    let playlist = state
        .repos
        .playlists
        .update_status(playlist_id, request.status)
        .await?
        .ok_or_else(|| AppError::NotFound("Playlist not found".into()))?;

    Ok(Json(playlist))
}
