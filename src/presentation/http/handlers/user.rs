//! User Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CreateUserRequest, UpdateStatusRequest};
use crate::domain::{User, UserStatus};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::handlers::parse_id;
use crate::shared::error::AppError;
use crate::shared::validation::{parse_and_validate, parse_body};
use crate::startup::AppState;

/// List all users, most recently joined first
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.repos.users.find_all().await?;
    Ok(Json(users))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user_id = parse_id(&user_id, "user")?;

    let user = state
        .repos
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<User>), AppError> {
    let request: CreateUserRequest = parse_and_validate(body)?;

    let user = state.repos.users.create(request.into()).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Enable, disable or deactivate a user
pub async fn update_user_status(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<User>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let request: UpdateStatusRequest<UserStatus> = parse_body(body)?;

    let user = state
        .repos
        .users
        .update_status(user_id, request.status)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    tracing::info!(user_id, status = %user.status, "User status changed");
    Ok(Json(user))
}

/// Delete a user. Missing IDs are not an error.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user_id = parse_id(&user_id, "user")?;

    state.repos.users.delete(user_id).await?;
    tracing::info!(user_id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
