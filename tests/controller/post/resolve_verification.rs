//! Tests for the resolve_verification endpoint.
//!
//! This module verifies the resolve_verification endpoint's behavior,
//! including approval and rejection of a pending request, validation of the
//! rejection reason, and conflict mapping for already resolved requests.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::VerificationStatus;
use voltmarket::{
    model::post::ResolveVerificationDto, server::controller::post::resolve_verification,
};

use super::*;

/// Tests successful approval of a pending request.
///
/// Verifies that the resolve_verification endpoint returns a 200 OK response
/// when approving a listing with a pending verification request.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_approval() -> Result<(), TestError> {
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

    let dto = ResolveVerificationDto {
        approved: true,
        reason: None,
    };

    let result = resolve_verification(State(test.state()), Path(post.id), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests successful rejection of a pending request.
///
/// Verifies that the resolve_verification endpoint returns a 200 OK response
/// when rejecting with a reason.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_rejection_with_reason() -> Result<(), TestError> {
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

    let dto = ResolveVerificationDto {
        approved: false,
        reason: Some("Frame number is unreadable".to_string()),
    };

    let result = resolve_verification(State(test.state()), Path(post.id), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 400 response for a rejection without a reason.
///
/// Verifies that the resolve_verification endpoint returns a 400 BAD REQUEST
/// response when the rejection payload carries no reason.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_rejection_without_reason() -> Result<(), TestError> {
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

    let dto = ResolveVerificationDto {
        approved: false,
        reason: None,
    };

    let result = resolve_verification(State(test.state()), Path(post.id), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests 404 response when no request was ever made.
///
/// Verifies that the resolve_verification endpoint returns a 404 NOT FOUND
/// response for a listing without a verification record.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_without_standing_request() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Published)
        .await?;
    test.post().insert_mock_car_details(post.id).await?;

    let dto = ResolveVerificationDto {
        approved: true,
        reason: None,
    };

    let result = resolve_verification(State(test.state()), Path(post.id), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests 409 response for an already resolved request.
///
/// Verifies that the resolve_verification endpoint returns a 409 CONFLICT
/// response when the verification record is no longer pending.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_for_resolved_request() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Published)
        .await?;
    test.post().insert_mock_car_details(post.id).await?;
    test.post()
        .insert_mock_verification(post.id, VerificationStatus::Verified)
        .await?;

    let dto = ResolveVerificationDto {
        approved: true,
        reason: None,
    };

    let result = resolve_verification(State(test.state()), Path(post.id), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
