//! Refund policy administration.
//!
//! The policy is a singleton record: reads 404 until an admin first saves
//! it, and every save after that replaces the stored values.

use rust_decimal::Decimal;

use crate::{
    model::settings::{RefundPolicyDto, SaveRefundPolicyDto},
    server::{
        data::settings::refund_policy::RefundPolicyRepository,
        error::{settings::SettingsError, Error},
        model::db::RefundPolicyModel,
    },
};

use super::{invalid, SettingsService};

fn policy_view(policy: RefundPolicyModel) -> RefundPolicyDto {
    RefundPolicyDto {
        refund_percent: policy.refund_percent,
        cancel_window_hours: policy.cancel_window_hours,
        description: policy.description,
        updated_at: policy.updated_at,
    }
}

impl<'a> SettingsService<'a> {
    /// Gets the refund policy.
    ///
    /// # Returns
    /// - `Ok(RefundPolicyDto)` - The stored policy
    /// - `Err(Error::SettingsError)` - No policy has been saved yet
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_refund_policy(&self) -> Result<RefundPolicyDto, Error> {
        let policy_repo = RefundPolicyRepository::new(self.db);

        let policy = policy_repo
            .get()
            .await?
            .ok_or(SettingsError::RefundPolicyNotConfigured)?;

        Ok(policy_view(policy))
    }

    /// Saves the refund policy, creating it on the first call.
    ///
    /// # Arguments
    /// - `dto` - Refund percent, cancellation window, and optional description
    ///
    /// # Returns
    /// - `Ok(RefundPolicyDto)` - The stored policy after the save
    /// - `Err(Error::SettingsError)` - The percent or window is out of range
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn save_refund_policy(
        &self,
        dto: SaveRefundPolicyDto,
    ) -> Result<RefundPolicyDto, Error> {
        if dto.refund_percent < Decimal::ZERO || dto.refund_percent > Decimal::ONE {
            return Err(invalid(
                "refundPercent",
                "Refund percent must be between 0 and 1",
            ));
        }
        if dto.cancel_window_hours < 0 {
            return Err(invalid(
                "cancelWindowHours",
                "Cancellation window must not be negative",
            ));
        }

        let policy_repo = RefundPolicyRepository::new(self.db);

        let policy = policy_repo.upsert(&dto).await?;

        Ok(policy_view(policy))
    }
}
