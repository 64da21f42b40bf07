pub mod details;
pub mod image;
pub mod verification;


use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, LoaderTrait, ModelTrait, QueryFilter, QueryOrder,
};

use entity::sea_orm_active_enums::PostStatus;

use crate::{
    model::post::{CreatePostDto, PostListQuery, UpdatePostDto},
    server::model::{db::PostModel, post::PostAggregate},
};

pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    /// Creates a new instance of [`PostRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new DRAFT listing row from the creation payload.
    ///
    /// Only the scalar post fields are written here; detail blocks and images
    /// are inserted by their own repositories, inside the same transaction.
    pub async fn create(&self, dto: &CreatePostDto) -> Result<PostModel, DbErr> {
        let post = entity::post::ActiveModel {
            seller_id: ActiveValue::Set(dto.seller_id),
            post_type: ActiveValue::Set(dto.post_type.clone()),
            title: ActiveValue::Set(dto.title.trim().to_string()),
            description: ActiveValue::Set(dto.description.clone()),
            ward_code: ActiveValue::Set(dto.ward_code.clone()),
            province_name_cached: ActiveValue::Set(dto.province_name_cached.clone()),
            district_name_cached: ActiveValue::Set(dto.district_name_cached.clone()),
            ward_name_cached: ActiveValue::Set(dto.ward_name_cached.clone()),
            address_text_cached: ActiveValue::Set(dto.address_text_cached.clone()),
            price: ActiveValue::Set(dto.price),
            is_negotiable: ActiveValue::Set(dto.is_negotiable),
            status: ActiveValue::Set(PostStatus::Draft),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        post.insert(self.db).await
    }

    /// Gets a post by its ID
    pub async fn get(&self, post_id: i32) -> Result<Option<PostModel>, DbErr> {
        entity::prelude::Post::find_by_id(post_id).one(self.db).await
    }

    /// Lists posts matching the query filters, newest first.
    pub async fn list(&self, query: &PostListQuery) -> Result<Vec<PostModel>, DbErr> {
        let mut select = entity::prelude::Post::find();

        if let Some(status) = &query.status {
            select = select.filter(entity::post::Column::Status.eq(status.clone()));
        }
        if let Some(post_type) = &query.post_type {
            select = select.filter(entity::post::Column::PostType.eq(post_type.clone()));
        }
        if let Some(seller_id) = query.seller_id {
            select = select.filter(entity::post::Column::SellerId.eq(seller_id));
        }

        select
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the scalar fields of an edit payload to a post.
    ///
    /// Absent payload fields leave the stored value untouched. Lifecycle
    /// fields are not changed here.
    pub async fn update(&self, post: PostModel, dto: &UpdatePostDto) -> Result<PostModel, DbErr> {
        let mut post = post.into_active_model();

        if let Some(title) = &dto.title {
            post.title = ActiveValue::Set(title.trim().to_string());
        }
        if let Some(description) = &dto.description {
            post.description = ActiveValue::Set(Some(description.clone()));
        }
        if let Some(ward_code) = &dto.ward_code {
            post.ward_code = ActiveValue::Set(Some(ward_code.clone()));
        }
        if let Some(province_name) = &dto.province_name_cached {
            post.province_name_cached = ActiveValue::Set(Some(province_name.clone()));
        }
        if let Some(district_name) = &dto.district_name_cached {
            post.district_name_cached = ActiveValue::Set(Some(district_name.clone()));
        }
        if let Some(ward_name) = &dto.ward_name_cached {
            post.ward_name_cached = ActiveValue::Set(Some(ward_name.clone()));
        }
        if let Some(address_text) = &dto.address_text_cached {
            post.address_text_cached = ActiveValue::Set(Some(address_text.clone()));
        }
        if let Some(price) = dto.price {
            post.price = ActiveValue::Set(price);
        }
        if let Some(is_negotiable) = dto.is_negotiable {
            post.is_negotiable = ActiveValue::Set(is_negotiable);
        }
        post.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        post.update(self.db).await
    }

    /// Returns an edited REJECTED post to DRAFT for a fresh review cycle.
    ///
    /// Clears the rejection reason and both lifecycle timestamps.
    pub async fn revert_to_draft(&self, post: PostModel) -> Result<PostModel, DbErr> {
        let mut post = post.into_active_model();
        post.status = ActiveValue::Set(PostStatus::Draft);
        post.rejected_reason = ActiveValue::Set(None);
        post.submitted_at = ActiveValue::Set(None);
        post.reviewed_at = ActiveValue::Set(None);
        post.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        post.update(self.db).await
    }

    /// Moves a post to PENDING_REVIEW and stamps the submission time.
    pub async fn mark_submitted(&self, post: PostModel) -> Result<PostModel, DbErr> {
        let mut post = post.into_active_model();
        post.status = ActiveValue::Set(PostStatus::PendingReview);
        post.submitted_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        post.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        post.update(self.db).await
    }

    /// Records a review decision and stamps the review time.
    ///
    /// `status` is PUBLISHED for an approval or REJECTED for a rejection; a
    /// rejection carries the reason shown to the seller.
    pub async fn mark_reviewed(
        &self,
        post: PostModel,
        status: PostStatus,
        rejected_reason: Option<String>,
    ) -> Result<PostModel, DbErr> {
        let mut post = post.into_active_model();
        post.status = ActiveValue::Set(status);
        post.rejected_reason = ActiveValue::Set(rejected_reason);
        post.reviewed_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        post.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        post.update(self.db).await
    }

    /// Sets the lifecycle status without touching the review timestamps.
    pub async fn update_status(
        &self,
        post: PostModel,
        status: PostStatus,
    ) -> Result<PostModel, DbErr> {
        let mut post = post.into_active_model();
        post.status = ActiveValue::Set(status);
        post.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        post.update(self.db).await
    }

    /// Deletes a post row.
    ///
    /// Child rows are removed by their own repositories first; run the whole
    /// delete inside a transaction.
    pub async fn delete(&self, post_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Post::delete_by_id(post_id)
            .exec(self.db)
            .await
    }

    /// Loads a post with all of its relations for assembly.
    ///
    /// The images are ordered by sort order so the cover image comes first.
    /// Relations without a stored row stay `None` in the aggregate.
    pub async fn get_aggregate(&self, post_id: i32) -> Result<Option<PostAggregate>, DbErr> {
        let post = match self.get(post_id).await? {
            Some(post) => post,
            None => return Ok(None),
        };

        let seller = post.find_related(entity::prelude::Account).one(self.db).await?;
        let car_details = post
            .find_related(entity::prelude::PostCarDetails)
            .one(self.db)
            .await?;
        let bike_details = post
            .find_related(entity::prelude::PostBikeDetails)
            .one(self.db)
            .await?;
        let images = post
            .find_related(entity::prelude::PostImage)
            .order_by_asc(entity::post_image::Column::SortOrder)
            .all(self.db)
            .await?;
        let verification = post
            .find_related(entity::prelude::PostVerification)
            .one(self.db)
            .await?;

        Ok(Some(PostAggregate {
            post,
            seller,
            car_details,
            bike_details,
            images: Some(images),
            verification,
        }))
    }

    /// Loads all posts matching the query filters as aggregates.
    ///
    /// Relations are batch-loaded and re-attached positionally, so the result
    /// preserves the newest-first order of [`Self::list`].
    pub async fn list_aggregates(
        &self,
        query: &PostListQuery,
    ) -> Result<Vec<PostAggregate>, DbErr> {
        let posts = self.list(query).await?;

        let sellers = posts.load_one(entity::prelude::Account, self.db).await?;
        let car_details = posts
            .load_one(entity::prelude::PostCarDetails, self.db)
            .await?;
        let bike_details = posts
            .load_one(entity::prelude::PostBikeDetails, self.db)
            .await?;
        let images = posts.load_many(entity::prelude::PostImage, self.db).await?;
        let verifications = posts
            .load_one(entity::prelude::PostVerification, self.db)
            .await?;

        let rows = posts
            .into_iter()
            .zip(sellers)
            .zip(car_details)
            .zip(bike_details)
            .zip(images)
            .zip(verifications);

        let mut aggregates = Vec::new();
        for (((((post, seller), car_details), bike_details), mut images), verification) in rows {
            images.sort_by_key(|image| image.sort_order);

            aggregates.push(PostAggregate {
                post,
                seller,
                car_details,
                bike_details,
                images: Some(images),
                verification,
            });
        }

        Ok(aggregates)
    }
}
