//! Factory functions for generating mock listing database models.
//!
//! Provides pure functions for creating post, detail block, image, and
//! verification database models with standard test values. These are
//! in-memory model instances that don't require database interaction,
//! suitable for unit tests such as assembler tests.

use chrono::Utc;
use entity::sea_orm_active_enums::{PostStatus, PostType, VehicleOrigin, VerificationStatus};
use rust_decimal::Decimal;

use crate::model::{
    BikeDetailsModel, CarDetailsModel, PostImageModel, PostModel, VerificationModel,
};

/// Create a mock post database model for testing.
///
/// Returns a DRAFT EV_CAR PostModel with standard test values. Tests that
/// need a different type or status can override fields with struct update
/// syntax.
///
/// # Arguments
/// - `id` - The post ID
/// - `seller_id` - The account ID of the owning seller
///
/// # Returns
/// - `PostModel` - A post model with test data
pub fn mock_post_model(id: i32, seller_id: i32) -> PostModel {
    let now = Utc::now().naive_utc();
    PostModel {
        id,
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
        status: PostStatus::Draft,
        rejected_reason: None,
        submitted_at: None,
        reviewed_at: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock car detail block for testing.
pub fn mock_car_details_model(post_id: i32) -> CarDetailsModel {
    CarDetailsModel {
        post_id,
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

/// Create a mock bike detail block for testing.
pub fn mock_bike_details_model(post_id: i32) -> BikeDetailsModel {
    BikeDetailsModel {
        post_id,
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

/// Create a mock image record for testing.
///
/// # Arguments
/// - `id` - The image record ID
/// - `post_id` - The owning post ID
/// - `sort_order` - Display position, 0 is the cover image
pub fn mock_image_model(id: i32, post_id: i32, sort_order: i32) -> PostImageModel {
    PostImageModel {
        id,
        post_id,
        url: format!("https://cdn.example.com/posts/{post_id}/{sort_order}.jpg"),
        sort_order,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock pending verification record for testing.
pub fn mock_verification_model(post_id: i32) -> VerificationModel {
    VerificationModel {
        post_id,
        status: VerificationStatus::Pending,
        rejected_reason: None,
        requested_at: Utc::now().naive_utc(),
        reviewed_at: None,
    }
}
