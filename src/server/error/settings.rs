use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::validation::ValidationError};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Fee tier ID {0:?} not found")]
    FeeTierNotFound(i32),
    #[error("Refund policy has not been configured yet")]
    RefundPolicyNotConfigured,
}

impl SettingsError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => err.into_response(),
            Self::FeeTierNotFound(fee_tier_id) => {
                tracing::debug!(
                    fee_tier_id = %fee_tier_id,
                    "{}",
                    self
                );

                Self::not_found("Fee tier not found")
            }
            Self::RefundPolicyNotConfigured => Self::not_found("Refund policy not configured"),
        }
    }
}
