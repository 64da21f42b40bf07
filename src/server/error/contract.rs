use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::validation::ValidationError};

/// Settlement domain failures covering contract creation preconditions and
/// the one-shot confirmation step.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Contract ID {0:?} not found")]
    NotFound(i32),
    #[error("Listing ID {0:?} not found")]
    ListingNotFound(i32),
    #[error("Buyer account ID {0:?} not found")]
    BuyerNotFound(i32),
    // `status` carries the stored wire value, e.g. "DRAFT".
    #[error("Listing ID {id:?} is not published, its status is {status}")]
    ListingNotPublished { id: i32, status: String },
    #[error("No active fee tier covers the listing price {0:?}")]
    NoFeeTier(i64),
    #[error("Contract ID {0:?} has already been confirmed")]
    AlreadyConfirmed(i32),
}

impl ContractError {
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

impl IntoResponse for ContractError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => err.into_response(),
            Self::NotFound(contract_id) => {
                tracing::debug!(
                    contract_id = %contract_id,
                    "{}",
                    self
                );

                Self::not_found("Contract not found")
            }
            Self::ListingNotFound(_) => Self::not_found("Listing not found"),
            Self::BuyerNotFound(_) => Self::not_found("Buyer account not found"),
            Self::ListingNotPublished { ref status, .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: format!("Listing is not published, its status is {status}"),
                }),
            )
                .into_response(),
            Self::NoFeeTier(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: "No active fee tier covers the listing price".to_string(),
                }),
            )
                .into_response(),
            Self::AlreadyConfirmed(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Contract has already been confirmed".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
