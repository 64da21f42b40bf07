use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::PostImageModel;

pub struct PostImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostImageRepository<'a, C> {
    /// Creates a new instance of [`PostImageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts image rows for a post, preserving list order.
    ///
    /// The first URL gets sort order 0 and becomes the cover image.
    pub async fn create_many(
        &self,
        post_id: i32,
        urls: &[String],
    ) -> Result<Vec<PostImageModel>, DbErr> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        let images = urls.iter().enumerate().map(|(index, url)| {
            entity::post_image::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                url: ActiveValue::Set(url.clone()),
                sort_order: ActiveValue::Set(index as i32),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            }
        });

        entity::prelude::PostImage::insert_many(images)
            .exec_with_returning(self.db)
            .await
    }

    /// Lists a post's images in display order.
    pub async fn list_for_post(&self, post_id: i32) -> Result<Vec<PostImageModel>, DbErr> {
        entity::prelude::PostImage::find()
            .filter(entity::post_image::Column::PostId.eq(post_id))
            .order_by_asc(entity::post_image::Column::SortOrder)
            .all(self.db)
            .await
    }

    /// Removes all images of a post.
    pub async fn delete_for_post(&self, post_id: i32) -> Result<(), DbErr> {
        entity::prelude::PostImage::delete_many()
            .filter(entity::post_image::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
