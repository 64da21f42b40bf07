//! Tests for the update_fee_tier endpoint.
//!
//! This module verifies the update_fee_tier endpoint's behavior, including
//! successful bracket replacement and error handling for unknown IDs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use voltmarket::server::controller::settings::update_fee_tier;

use super::*;

/// Tests successful update of an existing fee tier.
///
/// Verifies that the update_fee_tier endpoint returns a 200 OK response when
/// replacing the bracket and rate of a configured tier.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_existing_tier() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::FeeTier)?;

    let tier = test
        .settings()
        .insert_mock_fee_tier(0, Some(100_000_000), Decimal::new(2, 2))
        .await?;

    let dto = save_tier_dto(0, Some(150_000_000), Decimal::new(25, 3));

    let result = update_fee_tier(State(test.state()), Path(tier.id), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 400 response for an update colliding with a neighbor.
///
/// Verifies that the update_fee_tier endpoint returns a 400 BAD REQUEST
/// response when the new bracket intersects another active tier.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_neighbor_overlap() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::FeeTier)?;

    let tier = test
        .settings()
        .insert_mock_fee_tier(0, Some(100_000_000), Decimal::new(2, 2))
        .await?;
    test.settings()
        .insert_mock_fee_tier(100_000_000, Some(500_000_000), Decimal::new(15, 3))
        .await?;

    let dto = save_tier_dto(0, Some(200_000_000), Decimal::new(2, 2));

    let result = update_fee_tier(State(test.state()), Path(tier.id), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests 404 response for an unknown tier ID.
///
/// Verifies that the update_fee_tier endpoint returns a 404 NOT FOUND
/// response when no tier exists with the requested ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_tier() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::FeeTier)?;

    let dto = save_tier_dto(0, Some(100_000_000), Decimal::new(2, 2));

    let result = update_fee_tier(State(test.state()), Path(7), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
