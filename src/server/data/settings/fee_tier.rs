use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::settings::SaveFeeTierDto, server::model::db::FeeTierModel};

pub struct FeeTierRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeeTierRepository<'a, C> {
    /// Creates a new instance of [`FeeTierRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a fee tier by its ID
    pub async fn get(&self, tier_id: i32) -> Result<Option<FeeTierModel>, DbErr> {
        entity::prelude::FeeTier::find_by_id(tier_id).one(self.db).await
    }

    /// Lists every tier ascending by bracket start.
    pub async fn list(&self) -> Result<Vec<FeeTierModel>, DbErr> {
        entity::prelude::FeeTier::find()
            .order_by_asc(entity::fee_tier::Column::MinPrice)
            .all(self.db)
            .await
    }

    /// Lists only active tiers ascending by bracket start, the input the
    /// resolver expects.
    pub async fn list_active(&self) -> Result<Vec<FeeTierModel>, DbErr> {
        entity::prelude::FeeTier::find()
            .filter(entity::fee_tier::Column::Active.eq(true))
            .order_by_asc(entity::fee_tier::Column::MinPrice)
            .all(self.db)
            .await
    }

    /// Creates a tier. A missing `active` flag defaults to true.
    pub async fn create(&self, dto: &SaveFeeTierDto) -> Result<FeeTierModel, DbErr> {
        let tier = entity::fee_tier::ActiveModel {
            min_price: ActiveValue::Set(dto.min_price),
            max_price: ActiveValue::Set(dto.max_price),
            deposit_rate: ActiveValue::Set(dto.deposit_rate),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        tier.insert(self.db).await
    }

    /// Replaces a tier's bracket and rate. A missing `active` flag keeps the
    /// stored value.
    pub async fn update(
        &self,
        tier: FeeTierModel,
        dto: &SaveFeeTierDto,
    ) -> Result<FeeTierModel, DbErr> {
        let active = dto.active.unwrap_or(tier.active);

        let mut tier = tier.into_active_model();
        tier.min_price = ActiveValue::Set(dto.min_price);
        tier.max_price = ActiveValue::Set(dto.max_price);
        tier.deposit_rate = ActiveValue::Set(dto.deposit_rate);
        tier.active = ActiveValue::Set(active);
        tier.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        tier.update(self.db).await
    }

    /// Deletes a tier by its ID
    pub async fn delete(&self, tier_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FeeTier::delete_by_id(tier_id)
            .exec(self.db)
            .await
    }
}
