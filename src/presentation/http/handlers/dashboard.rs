//! Dashboard Handlers

use axum::{extract::State, Json};

use crate::application::services::DashboardService;
use crate::domain::{ActivityPoint, DashboardStats};
use crate::shared::error::AppError;
use crate::startup::AppState;

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    let stats = DashboardService::new(&state.repos).stats().await?;
    Ok(Json(stats))
}

/// Mocked activity chart data
pub async fn get_activity() -> Json<Vec<ActivityPoint>> {
    Json(DashboardService::activity())
}
