use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use entity::sea_orm_active_enums::VerificationStatus;

use crate::server::model::db::VerificationModel;

pub struct PostVerificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostVerificationRepository<'a, C> {
    /// Creates a new instance of [`PostVerificationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the verification record of a post, if one was ever requested.
    pub async fn get(&self, post_id: i32) -> Result<Option<VerificationModel>, DbErr> {
        entity::prelude::PostVerification::find_by_id(post_id)
            .one(self.db)
            .await
    }

    /// Opens a PENDING verification request for a post.
    pub async fn create_pending(&self, post_id: i32) -> Result<VerificationModel, DbErr> {
        let verification = entity::post_verification::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            status: ActiveValue::Set(VerificationStatus::Pending),
            rejected_reason: ActiveValue::Set(None),
            requested_at: ActiveValue::Set(Utc::now().naive_utc()),
            reviewed_at: ActiveValue::Set(None),
        };

        verification.insert(self.db).await
    }

    /// Reopens a rejected request as PENDING with a fresh request time.
    pub async fn re_request(
        &self,
        verification: VerificationModel,
    ) -> Result<VerificationModel, DbErr> {
        let mut verification = verification.into_active_model();
        verification.status = ActiveValue::Set(VerificationStatus::Pending);
        verification.rejected_reason = ActiveValue::Set(None);
        verification.requested_at = ActiveValue::Set(Utc::now().naive_utc());
        verification.reviewed_at = ActiveValue::Set(None);

        verification.update(self.db).await
    }

    /// Records the admin decision on a pending request.
    pub async fn resolve(
        &self,
        verification: VerificationModel,
        status: VerificationStatus,
        rejected_reason: Option<String>,
    ) -> Result<VerificationModel, DbErr> {
        let mut verification = verification.into_active_model();
        verification.status = ActiveValue::Set(status);
        verification.rejected_reason = ActiveValue::Set(rejected_reason);
        verification.reviewed_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        verification.update(self.db).await
    }

    /// Removes the verification record of a post.
    pub async fn delete_for_post(&self, post_id: i32) -> Result<(), DbErr> {
        entity::prelude::PostVerification::delete_many()
            .filter(entity::post_verification::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
