//! Tests for the update_post endpoint.
//!
//! This module verifies the update_post endpoint's behavior, including
//! successful partial edits of a draft listing, status conflict mapping for
//! published listings, and error handling for unknown IDs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use voltmarket::{model::post::UpdatePostDto, server::controller::post::update_post};

use super::*;

/// Tests successful partial edit of a draft listing.
///
/// Verifies that the update_post endpoint returns a 200 OK response when only
/// scalar fields of a draft listing are changed.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_draft_edit() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Draft)
        .await?;
    test.post().insert_mock_car_details(post.id).await?;

    let dto = UpdatePostDto {
        title: Some("VinFast VF 8 Plus 2023".to_string()),
        price: Some(310_000_000),
        ..UpdatePostDto::default()
    };

    let result = update_post(State(test.state()), Path(post.id), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 400 response for a mismatched detail block.
///
/// Verifies that the update_post endpoint rejects a bike detail block sent
/// for a car listing with a 400 BAD REQUEST response.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_mismatched_block() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Draft)
        .await?;
    test.post().insert_mock_car_details(post.id).await?;

    let dto = UpdatePostDto {
        bike_details: Some(mock_bike_details_dto()),
        ..UpdatePostDto::default()
    };

    let result = update_post(State(test.state()), Path(post.id), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests 409 response for an edit on a published listing.
///
/// Verifies that the update_post endpoint returns a 409 CONFLICT response
/// because only draft and rejected listings may be edited.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_for_published_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Published)
        .await?;
    test.post().insert_mock_car_details(post.id).await?;

    let dto = UpdatePostDto {
        price: Some(240_000_000),
        ..UpdatePostDto::default()
    };

    let result = update_post(State(test.state()), Path(post.id), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests 404 response for an unknown listing ID.
///
/// Verifies that the update_post endpoint returns a 404 NOT FOUND response
/// when no listing exists with the requested ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_listing() -> Result<(), TestError> {
    let test = test_setup_with_post_tables!()?;

    let dto = UpdatePostDto {
        title: Some("No such listing".to_string()),
        ..UpdatePostDto::default()
    };

    let result = update_post(State(test.state()), Path(999), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
