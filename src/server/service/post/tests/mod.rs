use sea_orm::DatabaseConnection;
use voltmarket_test_utils::prelude::*;

use entity::sea_orm_active_enums::{PostStatus, PostType};

use crate::{
    model::post::PostDto,
    server::{
        error::{post::PostError, validation::ValidationError, Error},
        service::post::PostService,
        util::test::post::mock_create_post_dto,
    },
};


fn rejected_field<T>(result: Result<T, Error>) -> &'static str {
    match result {
        Err(Error::PostError(PostError::Validation(ValidationError { field, .. }))) => field,
        Err(other) => panic!("expected a validation error, got {other:?}"),
        Ok(_) => panic!("expected a validation error, got a successful response"),
    }
}

/// Creates an EV_CAR listing for `seller_id` and walks it to `status`.
async fn mock_post_in_status(
    db: &DatabaseConnection,
    seller_id: i32,
    status: PostStatus,
) -> PostDto {
    let post_service = PostService::new(db);
    let post = post_service
        .create_post(mock_create_post_dto(seller_id, PostType::EvCar))
        .await
        .unwrap();

    match status {
        PostStatus::Draft => post,
        PostStatus::PendingReview => post_service.submit_post(post.id).await.unwrap(),
        PostStatus::Published => {
            post_service.submit_post(post.id).await.unwrap();
            post_service.approve_post(post.id).await.unwrap()
        }
        PostStatus::Rejected => {
            post_service.submit_post(post.id).await.unwrap();
            post_service
                .reject_post(post.id, "Photos are too blurry to assess".to_string())
                .await
                .unwrap()
        }
        PostStatus::Sold => {
            post_service.submit_post(post.id).await.unwrap();
            post_service.approve_post(post.id).await.unwrap();
            post_service.mark_post_sold(post.id).await.unwrap()
        }
    }
}
