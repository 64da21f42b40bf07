//! Account database insertion utilities.
//!
//! This module provides methods for inserting account records into the test
//! database. Insertions are idempotent on the generated email address so
//! fixtures can be re-run without violating the unique contact constraint.

use chrono::Utc;
use entity::sea_orm_active_enums::{AccountRole, AccountStatus};
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, fixtures::account::AccountFixtures, model::AccountModel};

impl<'a> AccountFixtures<'a> {
    /// Insert a mock account into the database.
    ///
    /// Creates an Account record with standard test values and a unique email
    /// derived from `n`. If an account with that email already exists, returns
    /// the existing record instead of creating a duplicate.
    ///
    /// # Arguments
    /// - `n` - Discriminator used for the generated email address
    ///
    /// # Returns
    /// - `Ok(AccountModel)` - The created or existing account record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_account(&self, n: i32) -> Result<AccountModel, TestError> {
        self.insert_mock_account_with_role(n, AccountRole::Member)
            .await
    }

    /// Insert a mock admin account into the database.
    ///
    /// Same as [`Self::insert_mock_account`] but with the ADMIN role.
    pub async fn insert_mock_admin(&self, n: i32) -> Result<AccountModel, TestError> {
        self.insert_mock_account_with_role(n, AccountRole::Admin)
            .await
    }

    async fn insert_mock_account_with_role(
        &self,
        n: i32,
        role: AccountRole,
    ) -> Result<AccountModel, TestError> {
        let email = format!("seller{n}@example.com");

        if let Some(existing_account) = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(&email))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_account);
        }

        let account = crate::fixtures::account::factory::mock_account_model(n);

        Ok(entity::prelude::Account::insert(entity::account::ActiveModel {
            full_name: ActiveValue::Set(account.full_name),
            email: ActiveValue::Set(Some(email)),
            phone: ActiveValue::Set(None),
            password_hash: ActiveValue::Set(account.password_hash),
            avatar_url: ActiveValue::Set(None),
            role: ActiveValue::Set(role),
            status: ActiveValue::Set(AccountStatus::Active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
