use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A commission bracket. Covers listing prices in `[minPrice, maxPrice)`;
/// `maxPrice: null` leaves the bracket open-ended upwards.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeTierDto {
    pub id: i32,
    pub min_price: i64,
    pub max_price: Option<i64>,
    pub deposit_rate: Decimal,
    pub active: bool,
    pub updated_at: NaiveDateTime,
}

/// Payload shared by fee tier creation and update. `active` defaults to true
/// when omitted on creation.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveFeeTierDto {
    pub min_price: i64,
    pub max_price: Option<i64>,
    pub deposit_rate: Decimal,
    pub active: Option<bool>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefundPolicyDto {
    pub refund_percent: Decimal,
    pub cancel_window_hours: i32,
    pub description: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRefundPolicyDto {
    pub refund_percent: Decimal,
    pub cancel_window_hours: i32,
    pub description: Option<String>,
}
