//! Factory functions for generating mock account database models.
//!
//! Provides pure functions for creating account database models with standard
//! test values. These are in-memory model instances that don't require
//! database interaction, suitable for unit tests.

use chrono::Utc;
use entity::sea_orm_active_enums::{AccountRole, AccountStatus};

use crate::model::AccountModel;

/// Create a mock account database model for testing.
///
/// Returns an AccountModel with standard test values and a unique email
/// derived from `n`. This creates an in-memory model instance without
/// database interaction, suitable for unit tests.
///
/// # Arguments
/// - `n` - Discriminator used for the id and the generated email address
///
/// # Returns
/// - `AccountModel` - An account model with test data
pub fn mock_account_model(n: i32) -> AccountModel {
    let now = Utc::now().naive_utc();
    AccountModel {
        id: n,
        full_name: format!("Test Seller {n}"),
        email: Some(format!("seller{n}@example.com")),
        phone: None,
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$AAAAAAAAAAA".to_string(),
        avatar_url: None,
        role: AccountRole::Member,
        status: AccountStatus::Active,
        created_at: now,
        updated_at: now,
    }
}
