//! Listing database insertion utilities.
//!
//! This module provides methods for inserting post records and their child
//! rows (detail blocks, images, verification) into the test database. Child
//! insertions are idempotent on the post ID so fixtures can be layered.

use chrono::Utc;
use entity::sea_orm_active_enums::{PostStatus, PostType, VerificationStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::post::{factory, PostFixtures},
    model::{BikeDetailsModel, CarDetailsModel, PostImageModel, PostModel, VerificationModel},
};

impl<'a> PostFixtures<'a> {
    /// Insert a mock post into the database.
    ///
    /// Creates a Post record with standard test values and the given type and
    /// lifecycle status. Lifecycle timestamps are populated to match the
    /// status: anything past DRAFT carries a submission time, anything past
    /// PENDING_REVIEW carries a review time.
    ///
    /// # Arguments
    /// - `seller_id` - Account ID of the owning seller (must exist)
    /// - `post_type` - Listing type stored on the row
    /// - `status` - Lifecycle status stored on the row
    ///
    /// # Returns
    /// - `Ok(PostModel)` - The created post record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_post(
        &self,
        seller_id: i32,
        post_type: PostType,
        status: PostStatus,
    ) -> Result<PostModel, TestError> {
        let now = Utc::now().naive_utc();
        let post = factory::mock_post_model(0, seller_id);

        let submitted_at = match status {
            PostStatus::Draft => None,
            _ => Some(now),
        };
        let reviewed_at = match status {
            PostStatus::Published | PostStatus::Rejected | PostStatus::Sold => Some(now),
            _ => None,
        };
        let rejected_reason = match status {
            PostStatus::Rejected => Some("Photos do not match the listed vehicle".to_string()),
            _ => None,
        };

        Ok(entity::prelude::Post::insert(entity::post::ActiveModel {
            seller_id: ActiveValue::Set(seller_id),
            post_type: ActiveValue::Set(post_type),
            title: ActiveValue::Set(post.title),
            description: ActiveValue::Set(post.description),
            ward_code: ActiveValue::Set(post.ward_code),
            province_name_cached: ActiveValue::Set(post.province_name_cached),
            district_name_cached: ActiveValue::Set(post.district_name_cached),
            ward_name_cached: ActiveValue::Set(post.ward_name_cached),
            address_text_cached: ActiveValue::Set(post.address_text_cached),
            price: ActiveValue::Set(post.price),
            is_negotiable: ActiveValue::Set(post.is_negotiable),
            status: ActiveValue::Set(status),
            rejected_reason: ActiveValue::Set(rejected_reason),
            submitted_at: ActiveValue::Set(submitted_at),
            reviewed_at: ActiveValue::Set(reviewed_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock car detail block for a post.
    ///
    /// If the post already has a car detail row, returns the existing record.
    pub async fn insert_mock_car_details(
        &self,
        post_id: i32,
    ) -> Result<CarDetailsModel, TestError> {
        if let Some(existing_details) = entity::prelude::PostCarDetails::find_by_id(post_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_details);
        }

        let details = factory::mock_car_details_model(post_id);

        Ok(
            entity::prelude::PostCarDetails::insert(entity::post_car_details::ActiveModel {
                post_id: ActiveValue::Set(details.post_id),
                brand_id: ActiveValue::Set(details.brand_id),
                model_id: ActiveValue::Set(details.model_id),
                manufacture_year: ActiveValue::Set(details.manufacture_year),
                body_style: ActiveValue::Set(details.body_style),
                origin: ActiveValue::Set(details.origin),
                color: ActiveValue::Set(details.color),
                seats: ActiveValue::Set(details.seats),
                license_plate: ActiveValue::Set(details.license_plate),
                owners_count: ActiveValue::Set(details.owners_count),
                odo_km: ActiveValue::Set(details.odo_km),
                battery_capacity_kwh: ActiveValue::Set(details.battery_capacity_kwh),
                range_km: ActiveValue::Set(details.range_km),
                charge_ac_kw: ActiveValue::Set(details.charge_ac_kw),
                charge_dc_kw: ActiveValue::Set(details.charge_dc_kw),
                battery_health_pct: ActiveValue::Set(details.battery_health_pct),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock bike detail block for a post.
    ///
    /// If the post already has a bike detail row, returns the existing record.
    pub async fn insert_mock_bike_details(
        &self,
        post_id: i32,
    ) -> Result<BikeDetailsModel, TestError> {
        if let Some(existing_details) = entity::prelude::PostBikeDetails::find_by_id(post_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_details);
        }

        let details = factory::mock_bike_details_model(post_id);

        Ok(
            entity::prelude::PostBikeDetails::insert(entity::post_bike_details::ActiveModel {
                post_id: ActiveValue::Set(details.post_id),
                brand_id: ActiveValue::Set(details.brand_id),
                model_id: ActiveValue::Set(details.model_id),
                manufacture_year: ActiveValue::Set(details.manufacture_year),
                bike_style: ActiveValue::Set(details.bike_style),
                origin: ActiveValue::Set(details.origin),
                color: ActiveValue::Set(details.color),
                license_plate: ActiveValue::Set(details.license_plate),
                owners_count: ActiveValue::Set(details.owners_count),
                odo_km: ActiveValue::Set(details.odo_km),
                battery_capacity_kwh: ActiveValue::Set(details.battery_capacity_kwh),
                range_km: ActiveValue::Set(details.range_km),
                motor_power_kw: ActiveValue::Set(details.motor_power_kw),
                charge_ac_kw: ActiveValue::Set(details.charge_ac_kw),
                battery_health_pct: ActiveValue::Set(details.battery_health_pct),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert `count` mock images for a post, sort orders 0..count.
    pub async fn insert_mock_images(
        &self,
        post_id: i32,
        count: i32,
    ) -> Result<Vec<PostImageModel>, TestError> {
        let now = Utc::now().naive_utc();
        let images = (0..count).map(|sort_order| {
            let image = factory::mock_image_model(0, post_id, sort_order);

            entity::post_image::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                url: ActiveValue::Set(image.url),
                sort_order: ActiveValue::Set(sort_order),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            }
        });

        Ok(entity::prelude::PostImage::insert_many(images)
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    /// Insert a mock verification record for a post.
    ///
    /// Resolved statuses carry a review timestamp, and a rejection carries a
    /// reason. If the post already has a verification row, returns the
    /// existing record.
    pub async fn insert_mock_verification(
        &self,
        post_id: i32,
        status: VerificationStatus,
    ) -> Result<VerificationModel, TestError> {
        if let Some(existing_verification) = entity::prelude::PostVerification::find_by_id(post_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_verification);
        }

        let now = Utc::now().naive_utc();
        let reviewed_at = match status {
            VerificationStatus::Pending => None,
            _ => Some(now),
        };
        let rejected_reason = match status {
            VerificationStatus::Rejected => Some("VIN does not match the title".to_string()),
            _ => None,
        };

        Ok(
            entity::prelude::PostVerification::insert(entity::post_verification::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                status: ActiveValue::Set(status),
                rejected_reason: ActiveValue::Set(rejected_reason),
                requested_at: ActiveValue::Set(now),
                reviewed_at: ActiveValue::Set(reviewed_at),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
