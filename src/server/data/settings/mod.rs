//! Marketplace settings repositories: fee tiers and the refund policy.

pub mod fee_tier;
pub mod refund_policy;
