use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        contract::{ContractDto, CreateContractDto},
    },
    server::{error::Error, model::app::AppState, service::contract::ContractService},
};

pub static CONTRACT_TAG: &str = "contract";

/// Create a deposit contract
///
/// Freezes the assembled listing as an immutable snapshot, resolves the
/// active fee tier for the listing price, and records the computed deposit.
#[utoipa::path(
    post,
    path = "/api/contracts",
    tag = CONTRACT_TAG,
    request_body = CreateContractDto,
    responses(
        (status = 201, description = "Contract created", body = ContractDto),
        (status = 400, description = "Buyer owns the listing", body = ValidationErrorDto),
        (status = 404, description = "Listing or buyer not found", body = ErrorDto),
        (status = 409, description = "Listing is not published", body = ErrorDto),
        (status = 422, description = "No active fee tier covers the listing price", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contract(
    State(state): State<AppState>,
    Json(dto): Json<CreateContractDto>,
) -> Result<impl IntoResponse, Error> {
    let contract_service = ContractService::new(&state.db);

    let contract = contract_service.create_contract(dto).await?;

    Ok((StatusCode::CREATED, Json(contract)))
}

/// Get a contract by ID
#[utoipa::path(
    get,
    path = "/api/contracts/{id}",
    tag = CONTRACT_TAG,
    params(
        ("id" = i32, Path, description = "Contract ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving the contract", body = ContractDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contract(
    State(state): State<AppState>,
    Path(contract_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let contract_service = ContractService::new(&state.db);

    let contract = contract_service.get_contract(contract_id).await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Confirm a contract
///
/// Stamps the confirmation time and the SHA-256 integrity hash over the
/// stored snapshot. A contract confirms at most once.
#[utoipa::path(
    post,
    path = "/api/contracts/{id}/confirm",
    tag = CONTRACT_TAG,
    params(
        ("id" = i32, Path, description = "Contract ID")
    ),
    responses(
        (status = 200, description = "Contract confirmed", body = ContractDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 409, description = "Contract already confirmed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_contract(
    State(state): State<AppState>,
    Path(contract_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let contract_service = ContractService::new(&state.db);

    let contract = contract_service.confirm_contract(contract_id).await?;

    Ok((StatusCode::OK, Json(contract)))
}
