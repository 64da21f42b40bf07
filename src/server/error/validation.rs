use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Rejected request input, tied to the payload field that caused it.
///
/// `field` names the offending field in the request's own casing so clients
/// can attach the message to the matching form input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed for field {field:?}: {message}")]
pub struct ValidationError {
    /// Payload field the message applies to, e.g. `"price"` or `"email"`.
    pub field: &'static str,
    /// Human-readable description of what is wrong with the value.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for `field` with the given message.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                field: self.field.to_string(),
                message: self.message,
            }),
        )
            .into_response()
    }
}
