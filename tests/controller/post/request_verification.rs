//! Tests for the request_verification endpoint.
//!
//! This module verifies the request_verification endpoint's behavior,
//! including opening a pending request for an eligible listing, conflict
//! mapping for ineligible statuses and standing requests, and error handling
//! for unknown IDs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::VerificationStatus;
use voltmarket::server::controller::post::request_verification;

use super::*;

/// Tests successful verification request for a published listing.
///
/// Verifies that the request_verification endpoint returns a 200 OK response
/// when the listing is published and carries no verification record yet.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_published_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Published)
        .await?;
    test.post().insert_mock_car_details(post.id).await?;

    let result = request_verification(State(test.state()), Path(post.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 409 response for a draft listing.
///
/// Verifies that the request_verification endpoint returns a 409 CONFLICT
/// response because drafts cannot request verification.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_for_draft_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Draft)
        .await?;
    test.post().insert_mock_car_details(post.id).await?;

    let result = request_verification(State(test.state()), Path(post.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests 409 response when a request is already pending.
///
/// Verifies that the request_verification endpoint returns a 409 CONFLICT
/// response when the listing already carries an unresolved request.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_for_standing_request() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Published)
        .await?;
    test.post().insert_mock_car_details(post.id).await?;
    test.post()
        .insert_mock_verification(post.id, VerificationStatus::Pending)
        .await?;

    let result = request_verification(State(test.state()), Path(post.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests 404 response for an unknown listing ID.
///
/// Verifies that the request_verification endpoint returns a 404 NOT FOUND
/// response when no listing exists with the requested ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_listing() -> Result<(), TestError> {
    let test = test_setup_with_post_tables!()?;

    let result = request_verification(State(test.state()), Path(404)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
