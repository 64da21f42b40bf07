//! Tests for the get_account endpoint.
//!
//! This module verifies the get_account endpoint's behavior, including
//! successful retrieval of an existing account and error handling for unknown
//! IDs and database issues.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use voltmarket::server::controller::account::get_account;

use super::*;

/// Tests successful retrieval of an existing account.
///
/// Verifies that the get_account endpoint returns a 200 OK response when the
/// requested account exists.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_existing_account() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Account)?;

    let account = test.account().insert_mock_account(1).await?;

    let result = get_account(State(test.state()), Path(account.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 404 response for an unknown account ID.
///
/// Verifies that the get_account endpoint returns a 404 NOT FOUND response
/// when no account exists with the requested ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account)?;

    let result = get_account(State(test.state()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the get_account endpoint returns a 500 INTERNAL SERVER ERROR
/// response when required database tables don't exist.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_account(State(test.state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
