//! Tests for listing controller endpoints.
//!
//! This module contains integration tests for listing-related HTTP endpoints,
//! covering creation, retrieval, filtering, partial edits, deletion, the
//! review lifecycle actions, and the vehicle verification workflow.

mod create_post;
mod get_post;
mod mark_post_sold;
mod request_verification;
mod resolve_verification;
mod update_post;

use entity::sea_orm_active_enums::{PostStatus, PostType, VehicleOrigin};
use rust_decimal::Decimal;
use voltmarket::model::post::{BikeDetailsDto, CarDetailsDto, CreatePostDto};

use super::*;

/// Builds a valid EV car creation payload owned by `seller_id`.
fn mock_create_post_dto(seller_id: i32) -> CreatePostDto {
    CreatePostDto {
        seller_id,
        post_type: PostType::EvCar,
        title: "VinFast VF 8 Eco 2022".to_string(),
        description: Some("One owner, full service history.".to_string()),
        ward_code: Some("26734".to_string()),
        province_name_cached: Some("Ho Chi Minh City".to_string()),
        district_name_cached: Some("District 7".to_string()),
        ward_name_cached: Some("Tan Phong".to_string()),
        address_text_cached: Some("12 Nguyen Luong Bang".to_string()),
        price: 250_000_000,
        is_negotiable: false,
        car_details: Some(mock_car_details_dto()),
        bike_details: None,
        images: vec![
            "https://cdn.example.com/posts/new/0.jpg".to_string(),
            "https://cdn.example.com/posts/new/1.jpg".to_string(),
        ],
    }
}

fn mock_car_details_dto() -> CarDetailsDto {
    CarDetailsDto {
        brand_id: 1,
        model_id: 3,
        manufacture_year: 2022,
        body_style: Some("SUV".to_string()),
        origin: VehicleOrigin::Domestic,
        color: Some("Ocean Blue".to_string()),
        seats: Some(5),
        license_plate: Some("51K-123.45".to_string()),
        owners_count: Some(1),
        odo_km: Some(23_000),
        battery_capacity_kwh: Some(Decimal::new(8750, 2)),
        range_km: Some(420),
        charge_ac_kw: Some(Decimal::new(1100, 2)),
        charge_dc_kw: Some(Decimal::new(15000, 2)),
        battery_health_pct: Some(Decimal::new(9800, 2)),
    }
}

fn mock_bike_details_dto() -> BikeDetailsDto {
    BikeDetailsDto {
        brand_id: 2,
        model_id: 9,
        manufacture_year: 2023,
        bike_style: Some("Scooter".to_string()),
        origin: VehicleOrigin::Domestic,
        color: Some("White".to_string()),
        license_plate: Some("59X1-678.90".to_string()),
        owners_count: Some(1),
        odo_km: Some(4_500),
        battery_capacity_kwh: Some(Decimal::new(350, 2)),
        range_km: Some(200),
        motor_power_kw: Some(Decimal::new(450, 2)),
        charge_ac_kw: Some(Decimal::new(120, 2)),
        battery_health_pct: Some(Decimal::new(9500, 2)),
    }
}
