use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Deposit contract between a buyer and the seller of a published listing.
///
/// `listingSnapshot` is the listing as assembled at creation time and is
/// never rewritten afterwards; the contract stays readable even if the
/// listing itself is later edited or deleted.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContractDto {
    pub id: i32,
    pub listing_id: i32,
    pub buyer_id: i32,
    pub seller_id: i32,
    pub file_path: Option<String>,
    #[schema(value_type = Object)]
    pub listing_snapshot: Value,
    pub fee_rate: Decimal,
    pub deposit_amount: i64,
    pub confirmed_at: Option<NaiveDateTime>,
    pub hash: Option<String>,
    pub signature_placeholder: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractDto {
    pub listing_id: i32,
    pub buyer_id: i32,
}
