//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod dashboard;
pub mod health;
pub mod moderation;
pub mod place;
pub mod playlist;
pub mod user;

use crate::shared::error::AppError;

/// Parse a numeric path ID, naming the entity in the error message.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", entity)))
}
