//! Tests for the create_account endpoint.
//!
//! This module verifies the create_account endpoint's behavior, including
//! successful signup with either contact mode, validation error mapping for
//! malformed payloads, and error handling for database issues.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use voltmarket::{model::account::CreateAccountDto, server::controller::account::create_account};

use super::*;

fn mock_signup_dto() -> CreateAccountDto {
    CreateAccountDto {
        full_name: "Tran Thi Hoa".to_string(),
        email: Some("hoa.tran@example.com".to_string()),
        phone: None,
        password: "vinfast-vf8-2022".to_string(),
        avatar_url: None,
    }
}

/// Tests successful signup with an email address.
///
/// Verifies that the create_account endpoint returns a 201 CREATED response
/// when the payload carries a well formed name, email, and password.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn created_with_email_contact() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account)?;

    let result = create_account(State(test.state()), Json(mock_signup_dto())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests successful signup with a phone number.
///
/// Verifies that the create_account endpoint accepts the phone contact mode
/// when no email is supplied.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn created_with_phone_contact() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account)?;

    let dto = CreateAccountDto {
        email: None,
        phone: Some("0912345678".to_string()),
        ..mock_signup_dto()
    };

    let result = create_account(State(test.state()), Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests 400 response for a blank full name.
///
/// Verifies that the create_account endpoint maps a field validation failure
/// to a 400 BAD REQUEST response without creating any account row.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_blank_name() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account)?;

    let dto = CreateAccountDto {
        full_name: "   ".to_string(),
        ..mock_signup_dto()
    };

    let result = create_account(State(test.state()), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests 400 response when both contact modes are supplied.
///
/// Verifies that the create_account endpoint rejects a payload carrying both
/// an email address and a phone number.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_both_contact_modes() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Account)?;

    let dto = CreateAccountDto {
        phone: Some("0912345678".to_string()),
        ..mock_signup_dto()
    };

    let result = create_account(State(test.state()), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the create_account endpoint returns a 500 INTERNAL SERVER
/// ERROR response when required database tables don't exist, indicating a
/// critical infrastructure issue.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = create_account(State(test.state()), Json(mock_signup_dto())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
