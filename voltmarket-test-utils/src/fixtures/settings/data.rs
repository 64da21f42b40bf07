//! Settings database insertion utilities.
//!
//! This module provides methods for inserting fee tier and refund policy
//! records into the test database. The refund policy helper is idempotent
//! since the table holds a single administrative row.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::settings::{factory, SettingsFixtures},
    model::{FeeTierModel, RefundPolicyModel},
};

impl<'a> SettingsFixtures<'a> {
    /// Insert a mock active fee tier into the database.
    ///
    /// # Arguments
    /// - `min_price` - Inclusive lower bound of the bracket
    /// - `max_price` - Exclusive upper bound, `None` for the open top tier
    /// - `deposit_rate` - Rate in [0, 1] applied to prices in the bracket
    ///
    /// # Returns
    /// - `Ok(FeeTierModel)` - The created fee tier record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_fee_tier(
        &self,
        min_price: i64,
        max_price: Option<i64>,
        deposit_rate: Decimal,
    ) -> Result<FeeTierModel, TestError> {
        Ok(entity::prelude::FeeTier::insert(entity::fee_tier::ActiveModel {
            min_price: ActiveValue::Set(min_price),
            max_price: ActiveValue::Set(max_price),
            deposit_rate: ActiveValue::Set(deposit_rate),
            active: ActiveValue::Set(true),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert the standard three-bracket tier ladder used across tests.
    ///
    /// Brackets: [0, 100) at 2%, [100, 500) at 1.5%, [500, unbounded) at 1%.
    pub async fn insert_standard_fee_tiers(&self) -> Result<Vec<FeeTierModel>, TestError> {
        let mut tiers = Vec::with_capacity(3);

        tiers.push(
            self.insert_mock_fee_tier(0, Some(100), Decimal::new(2, 2))
                .await?,
        );
        tiers.push(
            self.insert_mock_fee_tier(100, Some(500), Decimal::new(15, 3))
                .await?,
        );
        tiers.push(self.insert_mock_fee_tier(500, None, Decimal::new(1, 2)).await?);

        Ok(tiers)
    }

    /// Insert the mock refund policy row.
    ///
    /// If a policy row already exists, returns the existing record instead of
    /// creating a second one.
    pub async fn insert_mock_refund_policy(&self) -> Result<RefundPolicyModel, TestError> {
        if let Some(existing_policy) = entity::prelude::RefundPolicy::find()
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_policy);
        }

        let policy = factory::mock_refund_policy_model();

        Ok(
            entity::prelude::RefundPolicy::insert(entity::refund_policy::ActiveModel {
                refund_percent: ActiveValue::Set(policy.refund_percent),
                cancel_window_hours: ActiveValue::Set(policy.cancel_window_hours),
                description: ActiveValue::Set(policy.description),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
