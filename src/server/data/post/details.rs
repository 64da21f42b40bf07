use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{
    model::post::{BikeDetailsDto, CarDetailsDto},
    server::model::db::{BikeDetailsModel, CarDetailsModel},
};

pub struct PostDetailsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostDetailsRepository<'a, C> {
    /// Creates a new instance of [`PostDetailsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the car detail block for a post.
    pub async fn create_car(
        &self,
        post_id: i32,
        dto: &CarDetailsDto,
    ) -> Result<CarDetailsModel, DbErr> {
        let details = entity::post_car_details::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            brand_id: ActiveValue::Set(dto.brand_id),
            model_id: ActiveValue::Set(dto.model_id),
            manufacture_year: ActiveValue::Set(dto.manufacture_year),
            body_style: ActiveValue::Set(dto.body_style.clone()),
            origin: ActiveValue::Set(dto.origin.clone()),
            color: ActiveValue::Set(dto.color.clone()),
            seats: ActiveValue::Set(dto.seats),
            license_plate: ActiveValue::Set(dto.license_plate.clone()),
            owners_count: ActiveValue::Set(dto.owners_count),
            odo_km: ActiveValue::Set(dto.odo_km),
            battery_capacity_kwh: ActiveValue::Set(dto.battery_capacity_kwh),
            range_km: ActiveValue::Set(dto.range_km),
            charge_ac_kw: ActiveValue::Set(dto.charge_ac_kw),
            charge_dc_kw: ActiveValue::Set(dto.charge_dc_kw),
            battery_health_pct: ActiveValue::Set(dto.battery_health_pct),
        };

        details.insert(self.db).await
    }

    /// Inserts the bike detail block for a post.
    pub async fn create_bike(
        &self,
        post_id: i32,
        dto: &BikeDetailsDto,
    ) -> Result<BikeDetailsModel, DbErr> {
        let details = entity::post_bike_details::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            brand_id: ActiveValue::Set(dto.brand_id),
            model_id: ActiveValue::Set(dto.model_id),
            manufacture_year: ActiveValue::Set(dto.manufacture_year),
            bike_style: ActiveValue::Set(dto.bike_style.clone()),
            origin: ActiveValue::Set(dto.origin.clone()),
            color: ActiveValue::Set(dto.color.clone()),
            license_plate: ActiveValue::Set(dto.license_plate.clone()),
            owners_count: ActiveValue::Set(dto.owners_count),
            odo_km: ActiveValue::Set(dto.odo_km),
            battery_capacity_kwh: ActiveValue::Set(dto.battery_capacity_kwh),
            range_km: ActiveValue::Set(dto.range_km),
            motor_power_kw: ActiveValue::Set(dto.motor_power_kw),
            charge_ac_kw: ActiveValue::Set(dto.charge_ac_kw),
            battery_health_pct: ActiveValue::Set(dto.battery_health_pct),
        };

        details.insert(self.db).await
    }

    /// Removes whichever detail block a post carries.
    ///
    /// Used when an edit replaces the block and when a post is deleted; at
    /// most one of the two deletes matches a row.
    pub async fn delete_for_post(&self, post_id: i32) -> Result<(), DbErr> {
        entity::prelude::PostCarDetails::delete_many()
            .filter(entity::post_car_details::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;
        entity::prelude::PostBikeDetails::delete_many()
            .filter(entity::post_bike_details::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
