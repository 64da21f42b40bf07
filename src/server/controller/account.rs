use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        account::{AccountDto, CreateAccountDto},
        api::{ErrorDto, ValidationErrorDto},
    },
    server::{error::Error, model::app::AppState, service::account::AccountService},
};

pub static ACCOUNT_TAG: &str = "account";

/// Sign up a marketplace account
///
/// Registers an account with exactly one of email or phone as the contact
/// mode. The password is hashed before storage and never returned.
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Account created", body = AccountDto),
        (status = 400, description = "Invalid signup payload", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_account(
    State(state): State<AppState>,
    Json(dto): Json<CreateAccountDto>,
) -> Result<impl IntoResponse, Error> {
    let account_service = AccountService::new(&state.db);

    let account = account_service.create_account(dto).await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Get an account by ID
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving the account", body = AccountDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let account_service = AccountService::new(&state.db);

    let account = account_service.get_account(account_id).await?;

    Ok((StatusCode::OK, Json(account)))
}
