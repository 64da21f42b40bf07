//! Tests for the get_post endpoint.
//!
//! This module verifies the get_post endpoint's behavior, including
//! successful retrieval of an assembled listing with its detail block and
//! images, and error handling for unknown IDs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use voltmarket::server::controller::post::get_post;

use super::*;

/// Tests successful retrieval of an assembled listing.
///
/// Verifies that the get_post endpoint returns a 200 OK response for a
/// published listing carrying a car detail block and images.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_existing_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Published)
        .await?;
    test.post().insert_mock_car_details(post.id).await?;
    test.post().insert_mock_images(post.id, 3).await?;

    let result = get_post(State(test.state()), Path(post.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests successful retrieval of a listing without child rows.
///
/// Verifies that the get_post endpoint still returns a 200 OK response when
/// the listing has no images and no verification record.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_listing_without_children() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;

    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Draft)
        .await?;
    test.post().insert_mock_car_details(post.id).await?;

    let result = get_post(State(test.state()), Path(post.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 404 response for an unknown listing ID.
///
/// Verifies that the get_post endpoint returns a 404 NOT FOUND response when
/// no listing exists with the requested ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_listing() -> Result<(), TestError> {
    let test = test_setup_with_post_tables!()?;

    let result = get_post(State(test.state()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
