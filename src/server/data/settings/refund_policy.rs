use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
};

use crate::{model::settings::SaveRefundPolicyDto, server::model::db::RefundPolicyModel};

pub struct RefundPolicyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RefundPolicyRepository<'a, C> {
    /// Creates a new instance of [`RefundPolicyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the singleton policy row, if it has been configured.
    pub async fn get(&self) -> Result<Option<RefundPolicyModel>, DbErr> {
        entity::prelude::RefundPolicy::find().one(self.db).await
    }

    /// Creates the policy row on first write, replaces it afterwards.
    pub async fn upsert(&self, dto: &SaveRefundPolicyDto) -> Result<RefundPolicyModel, DbErr> {
        match self.get().await? {
            Some(existing) => {
                let mut policy = existing.into_active_model();
                policy.refund_percent = ActiveValue::Set(dto.refund_percent);
                policy.cancel_window_hours = ActiveValue::Set(dto.cancel_window_hours);
                policy.description = ActiveValue::Set(dto.description.clone());
                policy.updated_at = ActiveValue::Set(Utc::now().naive_utc());

                policy.update(self.db).await
            }
            None => {
                let policy = entity::refund_policy::ActiveModel {
                    refund_percent: ActiveValue::Set(dto.refund_percent),
                    cancel_window_hours: ActiveValue::Set(dto.cancel_window_hours),
                    description: ActiveValue::Set(dto.description.clone()),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                };

                policy.insert(self.db).await
            }
        }
    }
}
