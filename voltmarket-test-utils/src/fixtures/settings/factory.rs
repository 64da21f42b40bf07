//! Factory functions for generating mock settings database models.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::model::{FeeTierModel, RefundPolicyModel};

/// Create a mock active fee tier model for testing.
///
/// # Arguments
/// - `id` - The tier ID
/// - `min_price` - Inclusive lower bound of the bracket
/// - `max_price` - Exclusive upper bound, `None` for the open top tier
/// - `deposit_rate` - Rate in [0, 1] applied to prices in the bracket
pub fn mock_fee_tier_model(
    id: i32,
    min_price: i64,
    max_price: Option<i64>,
    deposit_rate: Decimal,
) -> FeeTierModel {
    FeeTierModel {
        id,
        min_price,
        max_price,
        deposit_rate,
        active: true,
        updated_at: Utc::now().naive_utc(),
    }
}

/// Create a mock refund policy model for testing.
///
/// Uses a 50% refund within a 48 hour cancellation window.
pub fn mock_refund_policy_model() -> RefundPolicyModel {
    RefundPolicyModel {
        id: 1,
        refund_percent: Decimal::new(5, 1),
        cancel_window_hours: 48,
        description: Some("Deposits are half refundable within two days.".to_string()),
        updated_at: Utc::now().naive_utc(),
    }
}
