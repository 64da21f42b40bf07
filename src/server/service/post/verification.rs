//! Vehicle verification workflow.
//!
//! Sellers request verification for a listing under review or already
//! published; admins resolve the request as verified or rejected with a
//! reason. A rejected request may be reopened, any other existing request
//! makes a new one a conflict.

use sea_orm::ActiveEnum;

use entity::sea_orm_active_enums::{PostStatus, VerificationStatus};

use crate::{
    model::post::{PostDto, ResolveVerificationDto},
    server::{
        data::post::{verification::PostVerificationRepository, PostRepository},
        error::{post::PostError, Error},
    },
};

use super::{invalid, PostService};

impl<'a> PostService<'a> {
    /// Opens (or reopens) a verification request for a listing.
    ///
    /// # Arguments
    /// - `post_id` - ID of the listing to verify
    ///
    /// # Returns
    /// - `Ok(PostDto)` - The assembled listing with the pending request
    /// - `Err(Error::PostError)` - Unknown listing, a status that does not
    ///   allow verification, or a request that already stands
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn request_verification(&self, post_id: i32) -> Result<PostDto, Error> {
        let post_repo = PostRepository::new(self.db);
        let post = post_repo
            .get(post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;

        match post.status {
            PostStatus::PendingReview | PostStatus::Published => (),
            _ => {
                return Err(PostError::InvalidTransition {
                    id: post_id,
                    action: "request verification for",
                    status: post.status.to_value(),
                }
                .into());
            }
        }

        let verification_repo = PostVerificationRepository::new(self.db);
        match verification_repo.get(post_id).await? {
            None => {
                verification_repo.create_pending(post_id).await?;
            }
            Some(existing) if existing.status == VerificationStatus::Rejected => {
                verification_repo.re_request(existing).await?;
            }
            Some(_) => {
                return Err(PostError::VerificationAlreadyRequested(post_id).into());
            }
        }

        self.get_post(post_id).await
    }

    /// Resolves a pending verification request.
    ///
    /// Approval marks the vehicle VERIFIED; a rejection must carry a reason,
    /// which stays visible on the listing until a new request is opened.
    ///
    /// # Arguments
    /// - `post_id` - ID of the listing whose request is being resolved
    /// - `dto` - The admin decision
    ///
    /// # Returns
    /// - `Ok(PostDto)` - The assembled listing with the resolved request
    /// - `Err(Error::PostError)` - Unknown listing, no open request, or the
    ///   request was already resolved
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn resolve_verification(
        &self,
        post_id: i32,
        dto: ResolveVerificationDto,
    ) -> Result<PostDto, Error> {
        let reason = dto
            .reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .map(str::to_string);

        if !dto.approved && reason.is_none() {
            return Err(invalid("reason", "A rejection reason is required"));
        }

        let post_repo = PostRepository::new(self.db);
        if post_repo.get(post_id).await?.is_none() {
            return Err(PostError::NotFound(post_id).into());
        }

        let verification_repo = PostVerificationRepository::new(self.db);
        let verification = verification_repo
            .get(post_id)
            .await?
            .ok_or(PostError::VerificationNotRequested(post_id))?;

        if verification.status != VerificationStatus::Pending {
            return Err(PostError::VerificationAlreadyResolved(post_id).into());
        }

        let (status, rejected_reason) = if dto.approved {
            (VerificationStatus::Verified, None)
        } else {
            (VerificationStatus::Rejected, reason)
        };

        verification_repo
            .resolve(verification, status, rejected_reason)
            .await?;

        self.get_post(post_id).await
    }
}
