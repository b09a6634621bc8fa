//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::shared::error::AppError;

/// Raw JSON request body.
///
/// Bodies are kept untyped so handlers can normalize them before typed
/// validation. Malformed JSON or a missing content type is reported through
/// [`AppError::BadRequest`] instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}
