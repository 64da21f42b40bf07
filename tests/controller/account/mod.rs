//! Tests for account controller endpoints.
//!
//! This module contains integration tests for account-related HTTP endpoints,
//! covering marketplace signup and account retrieval.

mod create_account;
mod get_account;

use super::*;
