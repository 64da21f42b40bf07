use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::validation::ValidationError};

#[derive(Error, Debug)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Account ID {0:?} not found")]
    NotFound(i32),
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => err.into_response(),
            Self::NotFound(account_id) => {
                tracing::debug!(
                    account_id = %account_id,
                    "{}",
                    self
                );

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Account not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
