use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        settings::{FeeTierDto, RefundPolicyDto, SaveFeeTierDto, SaveRefundPolicyDto},
    },
    server::{error::Error, model::app::AppState, service::settings::SettingsService},
};

pub static SETTINGS_TAG: &str = "settings";

/// List fee tiers
///
/// Returns every commission bracket ascending by its start price, inactive
/// tiers included.
#[utoipa::path(
    get,
    path = "/api/settings/fee-tiers",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Success when listing fee tiers", body = Vec<FeeTierDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_fee_tiers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db);

    let tiers = settings_service.list_fee_tiers().await?;

    Ok((StatusCode::OK, Json(tiers)))
}

/// Create a fee tier
///
/// The bracket must not overlap any other active tier so every price resolves
/// to at most one tier.
#[utoipa::path(
    post,
    path = "/api/settings/fee-tiers",
    tag = SETTINGS_TAG,
    request_body = SaveFeeTierDto,
    responses(
        (status = 201, description = "Fee tier created", body = FeeTierDto),
        (status = 400, description = "Invalid bracket, rate, or an overlap", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fee_tier(
    State(state): State<AppState>,
    Json(dto): Json<SaveFeeTierDto>,
) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db);

    let tier = settings_service.create_fee_tier(dto).await?;

    Ok((StatusCode::CREATED, Json(tier)))
}

/// Update a fee tier
#[utoipa::path(
    patch,
    path = "/api/settings/fee-tiers/{id}",
    tag = SETTINGS_TAG,
    params(
        ("id" = i32, Path, description = "Fee tier ID")
    ),
    request_body = SaveFeeTierDto,
    responses(
        (status = 200, description = "Fee tier updated", body = FeeTierDto),
        (status = 400, description = "Invalid bracket, rate, or an overlap", body = ValidationErrorDto),
        (status = 404, description = "Fee tier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_fee_tier(
    State(state): State<AppState>,
    Path(tier_id): Path<i32>,
    Json(dto): Json<SaveFeeTierDto>,
) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db);

    let tier = settings_service.update_fee_tier(tier_id, dto).await?;

    Ok((StatusCode::OK, Json(tier)))
}

/// Delete a fee tier
#[utoipa::path(
    delete,
    path = "/api/settings/fee-tiers/{id}",
    tag = SETTINGS_TAG,
    params(
        ("id" = i32, Path, description = "Fee tier ID")
    ),
    responses(
        (status = 204, description = "Fee tier deleted"),
        (status = 404, description = "Fee tier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fee_tier(
    State(state): State<AppState>,
    Path(tier_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db);

    settings_service.delete_fee_tier(tier_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the refund policy
///
/// Returns 404 until an admin saves the policy for the first time.
#[utoipa::path(
    get,
    path = "/api/settings/refund-policy",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Success when retrieving the refund policy", body = RefundPolicyDto),
        (status = 404, description = "Refund policy not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_refund_policy(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db);

    let policy = settings_service.get_refund_policy().await?;

    Ok((StatusCode::OK, Json(policy)))
}

/// Save the refund policy
///
/// Creates the singleton policy on the first call and replaces it afterwards.
#[utoipa::path(
    put,
    path = "/api/settings/refund-policy",
    tag = SETTINGS_TAG,
    request_body = SaveRefundPolicyDto,
    responses(
        (status = 200, description = "Refund policy saved", body = RefundPolicyDto),
        (status = 400, description = "Percent or window out of range", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_refund_policy(
    State(state): State<AppState>,
    Json(dto): Json<SaveRefundPolicyDto>,
) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db);

    let policy = settings_service.save_refund_policy(dto).await?;

    Ok((StatusCode::OK, Json(policy)))
}
