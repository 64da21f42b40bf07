//! Error types for the Voltmarket server application.
//!
//! This module provides the error handling system with specialized error types
//! for each domain (accounts, posts, settings, contracts, configuration). All
//! errors implement `IntoResponse` for Axum HTTP responses and use `thiserror`
//! for ergonomic error definitions with automatic `Display` and `Error` trait
//! implementations.

pub mod account;
pub mod config;
pub mod contract;
pub mod post;
pub mod settings;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        account::AccountError, config::ConfigError, contract::ContractError, post::PostError,
        settings::SettingsError, validation::ValidationError,
    },
};

/// Main error type for the Voltmarket server application.
///
/// This enum aggregates all domain-specific error types and external library
/// errors into a single unified error type. It uses `thiserror`'s `#[from]`
/// attribute to enable automatic conversion from underlying error types via
/// the `?` operator. The `IntoResponse` implementation maps errors to
/// appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Account errors (signup validation, lookup)
/// - Post errors (listing validation, lifecycle, verification)
/// - Settings errors (fee tier and refund policy administration)
/// - Contract errors (settlement preconditions, confirmation)
/// - External library errors (database, JSON, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Account error (signup validation, lookup).
    #[error(transparent)]
    AccountError(#[from] AccountError),
    /// Post error (listing validation, lifecycle, verification workflow).
    #[error(transparent)]
    PostError(#[from] PostError),
    /// Settings error (fee tier and refund policy administration).
    #[error(transparent)]
    SettingsError(#[from] SettingsError),
    /// Contract error (settlement preconditions, confirmation).
    #[error(transparent)]
    ContractError(#[from] ContractError),
    /// Request payload validation error outside any single domain.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Voltmarket's code.
    ///
    /// This error should never occur in normal operation and indicates a
    /// programming error that needs to be reported as a GitHub issue.
    #[error("Internal error with Voltmarket's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JSON serialization error (snapshot encoding, canonical hashing input).
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Password hashing error (Argon2 salt or digest failures).
    #[error("Failed to hash password: {0}")]
    PasswordHashError(argon2::password_hash::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err)
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error
/// responses. Most errors are treated as internal server errors (500) with
/// logging, while the domain error types carry their own response mappings.
///
/// # Returns
/// - 400 Bad Request - For request payload validation failures
/// - 404 Not Found - For missing resources
/// - 409 Conflict - For lifecycle and confirmation conflicts
/// - 422 Unprocessable Entity - For prices no active fee tier covers
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AccountError(err) => err.into_response(),
            Self::PostError(err) => err.into_response(),
            Self::SettingsError(err) => err.into_response(),
            Self::ContractError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server
/// error" message to the client to avoid leaking implementation details. Used
/// as a fallback for errors that don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client to avoid exposing internal implementation details or
/// sensitive information.
///
/// # Arguments
/// - `E` - Any type that implements `Display` (typically an error type)
///
/// # Returns
/// A 500 Internal Server Error response with a generic error message JSON body
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
