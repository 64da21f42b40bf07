use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{PostStatus, PostType, VehicleOrigin};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::account::AccountDto;

/// Verification state as shown to clients. Posts that never requested
/// verification have no stored record and surface as `NotRequested`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationDisplayStatus {
    NotRequested,
    Pending,
    Verified,
    Rejected,
}

/// Client-facing listing representation produced by the post assembler.
///
/// The `seller`, `carDetails`, `bikeDetails`, and `images` blocks are present
/// only when the corresponding relation was loaded; they are omitted from the
/// JSON entirely otherwise. At most one of the two detail blocks is ever
/// populated.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i32,
    pub seller_id: i32,
    pub post_type: PostType,
    pub title: String,
    pub description: Option<String>,
    pub ward_code: Option<String>,
    pub province_name_cached: Option<String>,
    pub district_name_cached: Option<String>,
    pub ward_name_cached: Option<String>,
    pub address_text_cached: Option<String>,
    pub price: i64,
    pub is_negotiable: bool,
    pub status: PostStatus,
    pub rejected_reason: Option<String>,
    pub submitted_at: Option<NaiveDateTime>,
    pub reviewed_at: Option<NaiveDateTime>,
    pub verification_status: VerificationDisplayStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_rejected_reason: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<AccountDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_details: Option<CarDetailsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bike_details: Option<BikeDetailsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<PostImageDto>>,
}

/// Car detail block. Field names stay snake_case on the wire; decimal
/// measurements serialize as strings so no precision is lost.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CarDetailsDto {
    pub brand_id: i32,
    pub model_id: i32,
    pub manufacture_year: i32,
    pub body_style: Option<String>,
    pub origin: VehicleOrigin,
    pub color: Option<String>,
    pub seats: Option<i32>,
    pub license_plate: Option<String>,
    pub owners_count: Option<i32>,
    pub odo_km: Option<i32>,
    pub battery_capacity_kwh: Option<Decimal>,
    pub range_km: Option<i32>,
    pub charge_ac_kw: Option<Decimal>,
    pub charge_dc_kw: Option<Decimal>,
    pub battery_health_pct: Option<Decimal>,
}

/// Bike detail block, snake_case on the wire like the car block.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct BikeDetailsDto {
    pub brand_id: i32,
    pub model_id: i32,
    pub manufacture_year: i32,
    pub bike_style: Option<String>,
    pub origin: VehicleOrigin,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub owners_count: Option<i32>,
    pub odo_km: Option<i32>,
    pub battery_capacity_kwh: Option<Decimal>,
    pub range_km: Option<i32>,
    pub motor_power_kw: Option<Decimal>,
    pub charge_ac_kw: Option<Decimal>,
    pub battery_health_pct: Option<Decimal>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostImageDto {
    pub id: i32,
    pub url: String,
    pub sort_order: i32,
}

/// Listing creation payload. The detail block must match `postType`: car
/// listings carry `carDetails`, bike listings carry `bikeDetails`, never
/// both. Image URLs are stored in the order given (first is the cover).
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    pub seller_id: i32,
    pub post_type: PostType,
    pub title: String,
    pub description: Option<String>,
    pub ward_code: Option<String>,
    pub province_name_cached: Option<String>,
    pub district_name_cached: Option<String>,
    pub ward_name_cached: Option<String>,
    pub address_text_cached: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub is_negotiable: bool,
    pub car_details: Option<CarDetailsDto>,
    pub bike_details: Option<BikeDetailsDto>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial listing edit. Absent fields are left unchanged; a provided detail
/// block replaces the stored one and must still match the post's type, and a
/// provided image list replaces all stored images.
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ward_code: Option<String>,
    pub province_name_cached: Option<String>,
    pub district_name_cached: Option<String>,
    pub ward_name_cached: Option<String>,
    pub address_text_cached: Option<String>,
    pub price: Option<i64>,
    pub is_negotiable: Option<bool>,
    pub car_details: Option<CarDetailsDto>,
    pub bike_details: Option<BikeDetailsDto>,
    pub images: Option<Vec<String>>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RejectPostDto {
    /// Reason shown to the seller for the rejection
    pub reason: String,
}

/// Admin decision on a verification request. A rejection must carry a reason.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolveVerificationDto {
    pub approved: bool,
    pub reason: Option<String>,
}

/// Listing query filters; all optional and combined with AND.
#[derive(Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PostListQuery {
    pub status: Option<PostStatus>,
    pub post_type: Option<PostType>,
    pub seller_id: Option<i32>,
}
