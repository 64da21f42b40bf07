//! Tests for the create_fee_tier endpoint.
//!
//! This module verifies the create_fee_tier endpoint's behavior, including
//! successful creation of a bracket and validation error mapping for bad
//! bounds and overlapping brackets.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use voltmarket::server::controller::settings::create_fee_tier;

use super::*;

/// Tests successful creation of a fee tier.
///
/// Verifies that the create_fee_tier endpoint returns a 201 CREATED response
/// for a well formed bracket.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn created_for_valid_bracket() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::FeeTier)?;

    let dto = save_tier_dto(0, Some(100_000_000), Decimal::new(2, 2));

    let result = create_fee_tier(State(test.state()), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests 400 response for an inverted bracket.
///
/// Verifies that the create_fee_tier endpoint returns a 400 BAD REQUEST
/// response when the upper bound does not exceed the lower bound.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_inverted_bracket() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::FeeTier)?;

    let dto = save_tier_dto(500_000_000, Some(100_000_000), Decimal::new(1, 2));

    let result = create_fee_tier(State(test.state()), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests 400 response for an overlapping bracket.
///
/// Verifies that the create_fee_tier endpoint returns a 400 BAD REQUEST
/// response when the new bracket intersects an active tier.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_overlapping_bracket() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::FeeTier)?;

    test.settings()
        .insert_mock_fee_tier(0, Some(100_000_000), Decimal::new(2, 2))
        .await?;

    let dto = save_tier_dto(50_000_000, Some(200_000_000), Decimal::new(15, 3));

    let result = create_fee_tier(State(test.state()), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
