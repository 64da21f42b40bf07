//! Tests for the create_post endpoint.
//!
//! This module verifies the create_post endpoint's behavior, including
//! successful draft creation for a valid payload, validation error mapping
//! for a missing detail block, and error handling for unknown sellers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use voltmarket::server::controller::post::create_post;

use super::*;

/// Tests successful creation of a draft listing.
///
/// Verifies that the create_post endpoint returns a 201 CREATED response when
/// the payload carries a car detail block matching the listing type.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn created_for_valid_payload() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;

    let result = create_post(State(test.state()), Json(mock_create_post_dto(seller.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests 400 response for a payload missing its detail block.
///
/// Verifies that the create_post endpoint maps the missing car block to a 400
/// BAD REQUEST response.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_missing_detail_block() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;

    let dto = CreatePostDto {
        car_details: None,
        ..mock_create_post_dto(seller.id)
    };

    let result = create_post(State(test.state()), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests 404 response for an unknown seller account.
///
/// Verifies that the create_post endpoint returns a 404 NOT FOUND response
/// when the payload references a seller that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_seller() -> Result<(), TestError> {
    let test = test_setup_with_post_tables!()?;

    let result = create_post(State(test.state()), Json(mock_create_post_dto(42))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
