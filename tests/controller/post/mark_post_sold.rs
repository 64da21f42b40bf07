//! Tests for the mark_post_sold endpoint.
//!
//! This module verifies the mark_post_sold endpoint's behavior, including
//! successful closing of a published listing, status conflict mapping, and
//! error handling for unknown IDs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use voltmarket::server::controller::post::mark_post_sold;

use super::*;

/// Tests successful closing of a published listing.
///
/// Verifies that the mark_post_sold endpoint returns a 200 OK response when
/// the listing is currently published.
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

    let result = mark_post_sold(State(test.state()), Path(post.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 409 response for a listing that is not published.
///
/// Verifies that the mark_post_sold endpoint returns a 409 CONFLICT response
/// for a draft listing.
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

    let result = mark_post_sold(State(test.state()), Path(post.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests 404 response for an unknown listing ID.
///
/// Verifies that the mark_post_sold endpoint returns a 404 NOT FOUND response
/// when no listing exists with the requested ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_listing() -> Result<(), TestError> {
    let test = test_setup_with_post_tables!()?;

    let result = mark_post_sold(State(test.state()), Path(404)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
