//! Listing service layer.
//!
//! Holds the listing rules end to end: creation with type-matched detail
//! blocks, partial edits, the DRAFT → PENDING_REVIEW → PUBLISHED/REJECTED →
//! SOLD lifecycle, and the vehicle verification workflow. Reads come back as
//! assembled responses via [`assemble`].

pub mod assemble;
pub mod verification;

#[cfg(test)]
mod tests;

use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};

use entity::sea_orm_active_enums::{PostStatus, PostType};

use crate::{
    model::post::{BikeDetailsDto, CarDetailsDto, CreatePostDto, PostDto, PostListQuery, UpdatePostDto},
    server::{
        data::{
            account::AccountRepository,
            post::{
                details::PostDetailsRepository, image::PostImageRepository,
                verification::PostVerificationRepository, PostRepository,
            },
        },
        error::{post::PostError, validation::ValidationError, Error},
    },
};

/// Service for listing CRUD and the listing lifecycle.
pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

fn invalid(field: &'static str, message: &str) -> Error {
    PostError::Validation(ValidationError::new(field, message)).into()
}

/// Checks that the supplied detail blocks fit the listing type.
///
/// Creation requires the matching block (`require_block`); edits may omit it
/// to leave the stored block untouched. A block for the other vehicle type is
/// rejected either way.
fn check_detail_blocks(
    post_type: &PostType,
    car_details: Option<&CarDetailsDto>,
    bike_details: Option<&BikeDetailsDto>,
    require_block: bool,
) -> Result<(), Error> {
    match post_type {
        PostType::EvCar => {
            if bike_details.is_some() {
                return Err(invalid(
                    "bikeDetails",
                    "Bike details do not apply to an EV_CAR listing",
                ));
            }
            if require_block && car_details.is_none() {
                return Err(invalid(
                    "carDetails",
                    "Car details are required for an EV_CAR listing",
                ));
            }
        }
        PostType::EvBike => {
            if car_details.is_some() {
                return Err(invalid(
                    "carDetails",
                    "Car details do not apply to an EV_BIKE listing",
                ));
            }
            if require_block && bike_details.is_none() {
                return Err(invalid(
                    "bikeDetails",
                    "Bike details are required for an EV_BIKE listing",
                ));
            }
        }
        PostType::EvBattery => {
            return Err(invalid(
                "postType",
                "EV_BATTERY listings are not supported yet",
            ));
        }
    }

    Ok(())
}

impl<'a> PostService<'a> {
    /// Creates a new instance of [`PostService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a DRAFT listing with its detail block and images.
    ///
    /// The post row, the type-specific detail block, and the image rows are
    /// written in one transaction; a failure leaves nothing behind.
    ///
    /// # Arguments
    /// - `dto` - Listing creation payload
    ///
    /// # Returns
    /// - `Ok(PostDto)` - The assembled newly-created listing
    /// - `Err(Error::PostError)` - Validation failed or the seller is unknown
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_post(&self, dto: CreatePostDto) -> Result<PostDto, Error> {
        if dto.title.trim().is_empty() {
            return Err(invalid("title", "Title is required"));
        }
        if dto.price <= 0 {
            return Err(invalid("price", "Price must be a positive amount"));
        }
        if dto.images.iter().any(|url| url.trim().is_empty()) {
            return Err(invalid("images", "Image URLs must not be blank"));
        }
        check_detail_blocks(
            &dto.post_type,
            dto.car_details.as_ref(),
            dto.bike_details.as_ref(),
            true,
        )?;

        let account_repo = AccountRepository::new(self.db);
        if account_repo.get(dto.seller_id).await?.is_none() {
            return Err(PostError::SellerNotFound(dto.seller_id).into());
        }

        let txn = self.db.begin().await?;

        let post = PostRepository::new(&txn).create(&dto).await?;

        let details_repo = PostDetailsRepository::new(&txn);
        if let Some(car_details) = &dto.car_details {
            details_repo.create_car(post.id, car_details).await?;
        }
        if let Some(bike_details) = &dto.bike_details {
            details_repo.create_bike(post.id, bike_details).await?;
        }

        PostImageRepository::new(&txn)
            .create_many(post.id, &dto.images)
            .await?;

        txn.commit().await?;

        self.get_post(post.id).await
    }

    /// Gets the assembled view of a listing with all relations loaded.
    ///
    /// # Arguments
    /// - `post_id` - ID of the listing to retrieve
    ///
    /// # Returns
    /// - `Ok(PostDto)` - The assembled listing
    /// - `Err(Error::PostError)` - No listing has the given ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_post(&self, post_id: i32) -> Result<PostDto, Error> {
        let post_repo = PostRepository::new(self.db);

        let aggregate = post_repo
            .get_aggregate(post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;

        Ok(assemble::assemble(aggregate))
    }

    /// Lists assembled listings matching the query filters, newest first.
    pub async fn list_posts(&self, query: &PostListQuery) -> Result<Vec<PostDto>, Error> {
        let post_repo = PostRepository::new(self.db);

        let aggregates = post_repo.list_aggregates(query).await?;

        Ok(assemble::assemble_many(aggregates))
    }

    /// Applies a partial edit to a DRAFT or REJECTED listing.
    ///
    /// A provided detail block replaces the stored one and must still match
    /// the listing type; a provided image list replaces all stored images.
    /// Editing a REJECTED listing returns it to DRAFT for a fresh review
    /// cycle.
    ///
    /// # Arguments
    /// - `post_id` - ID of the listing to edit
    /// - `dto` - Partial edit payload; absent fields stay unchanged
    ///
    /// # Returns
    /// - `Ok(PostDto)` - The assembled listing after the edit
    /// - `Err(Error::PostError)` - Unknown listing, validation failure, or a
    ///   status that does not permit edits
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_post(&self, post_id: i32, dto: UpdatePostDto) -> Result<PostDto, Error> {
        if let Some(title) = &dto.title {
            if title.trim().is_empty() {
                return Err(invalid("title", "Title is required"));
            }
        }
        if let Some(price) = dto.price {
            if price <= 0 {
                return Err(invalid("price", "Price must be a positive amount"));
            }
        }
        if let Some(images) = &dto.images {
            if images.iter().any(|url| url.trim().is_empty()) {
                return Err(invalid("images", "Image URLs must not be blank"));
            }
        }

        let post_repo = PostRepository::new(self.db);
        let post = post_repo
            .get(post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;

        match post.status {
            PostStatus::Draft | PostStatus::Rejected => (),
            _ => {
                return Err(PostError::InvalidTransition {
                    id: post_id,
                    action: "edit",
                    status: post.status.to_value(),
                }
                .into());
            }
        }

        check_detail_blocks(
            &post.post_type,
            dto.car_details.as_ref(),
            dto.bike_details.as_ref(),
            false,
        )?;

        let was_rejected = post.status == PostStatus::Rejected;

        let txn = self.db.begin().await?;
        let txn_post_repo = PostRepository::new(&txn);

        let post = txn_post_repo.update(post, &dto).await?;

        if dto.car_details.is_some() || dto.bike_details.is_some() {
            let details_repo = PostDetailsRepository::new(&txn);
            details_repo.delete_for_post(post.id).await?;
            if let Some(car_details) = &dto.car_details {
                details_repo.create_car(post.id, car_details).await?;
            }
            if let Some(bike_details) = &dto.bike_details {
                details_repo.create_bike(post.id, bike_details).await?;
            }
        }

        if let Some(images) = &dto.images {
            let image_repo = PostImageRepository::new(&txn);
            image_repo.delete_for_post(post.id).await?;
            image_repo.create_many(post.id, images).await?;
        }

        if was_rejected {
            txn_post_repo.revert_to_draft(post).await?;
        }

        txn.commit().await?;

        self.get_post(post_id).await
    }

    /// Deletes a listing together with its owned rows.
    ///
    /// # Arguments
    /// - `post_id` - ID of the listing to delete
    ///
    /// # Returns
    /// - `Ok(())` - The listing and its child rows are gone
    /// - `Err(Error::PostError)` - No listing has the given ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_post(&self, post_id: i32) -> Result<(), Error> {
        let post_repo = PostRepository::new(self.db);
        if post_repo.get(post_id).await?.is_none() {
            return Err(PostError::NotFound(post_id).into());
        }

        let txn = self.db.begin().await?;

        PostDetailsRepository::new(&txn).delete_for_post(post_id).await?;
        PostImageRepository::new(&txn).delete_for_post(post_id).await?;
        PostVerificationRepository::new(&txn)
            .delete_for_post(post_id)
            .await?;
        PostRepository::new(&txn).delete(post_id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Submits a DRAFT listing for review.
    pub async fn submit_post(&self, post_id: i32) -> Result<PostDto, Error> {
        let post_repo = PostRepository::new(self.db);
        let post = post_repo
            .get(post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;

        if post.status != PostStatus::Draft {
            return Err(PostError::InvalidTransition {
                id: post_id,
                action: "submit",
                status: post.status.to_value(),
            }
            .into());
        }

        post_repo.mark_submitted(post).await?;

        self.get_post(post_id).await
    }

    /// Approves a PENDING_REVIEW listing, publishing it.
    pub async fn approve_post(&self, post_id: i32) -> Result<PostDto, Error> {
        let post_repo = PostRepository::new(self.db);
        let post = post_repo
            .get(post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;

        if post.status != PostStatus::PendingReview {
            return Err(PostError::InvalidTransition {
                id: post_id,
                action: "approve",
                status: post.status.to_value(),
            }
            .into());
        }

        post_repo
            .mark_reviewed(post, PostStatus::Published, None)
            .await?;

        self.get_post(post_id).await
    }

    /// Rejects a PENDING_REVIEW listing with a reason for the seller.
    pub async fn reject_post(&self, post_id: i32, reason: String) -> Result<PostDto, Error> {
        if reason.trim().is_empty() {
            return Err(invalid("reason", "A rejection reason is required"));
        }

        let post_repo = PostRepository::new(self.db);
        let post = post_repo
            .get(post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;

        if post.status != PostStatus::PendingReview {
            return Err(PostError::InvalidTransition {
                id: post_id,
                action: "reject",
                status: post.status.to_value(),
            }
            .into());
        }

        post_repo
            .mark_reviewed(post, PostStatus::Rejected, Some(reason.trim().to_string()))
            .await?;

        self.get_post(post_id).await
    }

    /// Marks a PUBLISHED listing as sold.
    pub async fn mark_post_sold(&self, post_id: i32) -> Result<PostDto, Error> {
        let post_repo = PostRepository::new(self.db);
        let post = post_repo
            .get(post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;

        if post.status != PostStatus::Published {
            return Err(PostError::InvalidTransition {
                id: post_id,
                action: "mark sold",
                status: post.status.to_value(),
            }
            .into());
        }

        post_repo.update_status(post, PostStatus::Sold).await?;

        self.get_post(post_id).await
    }
}
