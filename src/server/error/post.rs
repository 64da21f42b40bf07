use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::validation::ValidationError};

/// Listing domain failures: payload validation, lookups, lifecycle
/// transitions, and the verification workflow.
#[derive(Error, Debug)]
pub enum PostError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Post ID {0:?} not found")]
    NotFound(i32),
    #[error("Seller account ID {0:?} not found")]
    SellerNotFound(i32),
    // `status` carries the stored wire value, e.g. "DRAFT".
    #[error("Cannot {action} post ID {id:?} while its status is {status}")]
    InvalidTransition {
        id: i32,
        action: &'static str,
        status: String,
    },
    #[error("Verification has already been requested for post ID {0:?}")]
    VerificationAlreadyRequested(i32),
    #[error("Verification has not been requested for post ID {0:?}")]
    VerificationNotRequested(i32),
    #[error("Verification request for post ID {0:?} has already been resolved")]
    VerificationAlreadyResolved(i32),
}

impl PostError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }

    fn conflict(message: String) -> Response {
        (StatusCode::CONFLICT, Json(ErrorDto { error: message })).into_response()
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => err.into_response(),
            Self::NotFound(post_id) => {
                tracing::debug!(
                    post_id = %post_id,
                    "{}",
                    self
                );

                Self::not_found("Post not found")
            }
            Self::SellerNotFound(_) => Self::not_found("Seller account not found"),
            Self::InvalidTransition { .. } => {
                let message = self.to_string();

                Self::conflict(message)
            }
            Self::VerificationAlreadyRequested(_) => {
                Self::conflict("Verification has already been requested for this post".to_string())
            }
            Self::VerificationNotRequested(_) => {
                Self::not_found("No verification request exists for this post")
            }
            Self::VerificationAlreadyResolved(_) => {
                Self::conflict("Verification request has already been resolved".to_string())
            }
        }
    }
}
