//! Tests for the delete_fee_tier endpoint.
//!
//! This module verifies the delete_fee_tier endpoint's behavior, including
//! successful removal and error handling for unknown IDs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use voltmarket::server::controller::settings::delete_fee_tier;

use super::*;

/// Tests successful deletion of a fee tier.
///
/// Verifies that the delete_fee_tier endpoint returns a 204 NO CONTENT
/// response when the tier exists.
///
/// Expected: Ok with 204 NO_CONTENT response
#[tokio::test]
async fn no_content_for_existing_tier() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::FeeTier)?;

    let tier = test
        .settings()
        .insert_mock_fee_tier(0, Some(100_000_000), Decimal::new(2, 2))
        .await?;

    let result = delete_fee_tier(State(test.state()), Path(tier.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Tests 404 response for an unknown tier ID.
///
/// Verifies that the delete_fee_tier endpoint returns a 404 NOT FOUND
/// response when no tier exists with the requested ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_tier() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::FeeTier)?;

    let result = delete_fee_tier(State(test.state()), Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
