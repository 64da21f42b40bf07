use super::*;

/// Expect PENDING_REVIEW with a submission timestamp
#[tokio::test]
async fn mark_submitted_stamps_submission_time() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;
    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Draft)
        .await?;

    let post_repo = PostRepository::new(&test.db);
    let result = post_repo.mark_submitted(post).await;

    assert!(result.is_ok());
    let submitted = result.unwrap();
    assert_eq!(submitted.status, PostStatus::PendingReview);
    assert!(submitted.submitted_at.is_some());
    assert_eq!(submitted.reviewed_at, None);

    Ok(())
}

/// Expect PUBLISHED with a review timestamp and no reason on approval
#[tokio::test]
async fn mark_reviewed_records_approval() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;
    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::PendingReview)
        .await?;

    let post_repo = PostRepository::new(&test.db);
    let result = post_repo
        .mark_reviewed(post, PostStatus::Published, None)
        .await;

    assert!(result.is_ok());
    let published = result.unwrap();
    assert_eq!(published.status, PostStatus::Published);
    assert_eq!(published.rejected_reason, None);
    assert!(published.reviewed_at.is_some());

    Ok(())
}

/// Expect REJECTED with the stored reason on rejection
#[tokio::test]
async fn mark_reviewed_records_rejection_reason() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;
    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::PendingReview)
        .await?;

    let post_repo = PostRepository::new(&test.db);
    let result = post_repo
        .mark_reviewed(
            post,
            PostStatus::Rejected,
            Some("Odometer photo missing".to_string()),
        )
        .await;

    assert!(result.is_ok());
    let rejected = result.unwrap();
    assert_eq!(rejected.status, PostStatus::Rejected);
    assert_eq!(
        rejected.rejected_reason,
        Some("Odometer photo missing".to_string())
    );

    Ok(())
}

/// Expect DRAFT with the rejection state fully cleared
#[tokio::test]
async fn revert_to_draft_clears_review_state() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;
    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Rejected)
        .await?;

    let post_repo = PostRepository::new(&test.db);
    let result = post_repo.revert_to_draft(post).await;

    assert!(result.is_ok());
    let draft = result.unwrap();
    assert_eq!(draft.status, PostStatus::Draft);
    assert_eq!(draft.rejected_reason, None);
    assert_eq!(draft.submitted_at, None);
    assert_eq!(draft.reviewed_at, None);

    Ok(())
}

/// Expect SOLD while the review timestamps stay untouched
#[tokio::test]
async fn update_status_keeps_review_timestamps() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;
    let seller = test.account().insert_mock_account(1).await?;
    let post = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Published)
        .await?;
    let reviewed_at = post.reviewed_at;

    let post_repo = PostRepository::new(&test.db);
    let result = post_repo.update_status(post, PostStatus::Sold).await;

    assert!(result.is_ok());
    let sold = result.unwrap();
    assert_eq!(sold.status, PostStatus::Sold);
    assert_eq!(sold.reviewed_at, reviewed_at);

    Ok(())
}
