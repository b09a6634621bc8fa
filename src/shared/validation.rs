//! Validation Utilities
//!
//! Request bodies are accepted as raw JSON, deserialized into a typed request
//! and then checked with `validator`. Every failure along that path becomes an
//! [`AppError::Validation`] whose message is the first field issue.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use super::error::{AppError, FieldError};

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid ({})", field, e.code)),
            })
        })
        .collect();

    // field_errors() is a map; order by field so "first" is stable
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));

    let message = field_errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation {
        message,
        errors: field_errors,
    }
}

/// Deserialize a JSON body into `T`, reporting shape errors as validation failures.
pub fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::validation(e.to_string()))
}

/// Deserialize a JSON body into `T` and run its `validator` rules.
pub fn parse_and_validate<T>(body: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let request: T = parse_body(body)?;
    request.validate().map_err(validation_error)?;
    Ok(request)
}
