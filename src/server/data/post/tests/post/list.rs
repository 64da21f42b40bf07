use super::*;

/// Expect only posts with the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;
    let seller = test.account().insert_mock_account(1).await?;
    let _ = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Draft)
        .await?;
    let published = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Published)
        .await?;

    let post_repo = PostRepository::new(&test.db);
    let query = PostListQuery {
        status: Some(PostStatus::Published),
        ..Default::default()
    };
    let result = post_repo.list(&query).await;

    assert!(result.is_ok());
    let posts = result.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, published.id);

    Ok(())
}

/// Expect type and seller filters combined with AND
#[tokio::test]
async fn filters_by_type_and_seller() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;
    let first_seller = test.account().insert_mock_account(1).await?;
    let second_seller = test.account().insert_mock_account(2).await?;
    let _ = test
        .post()
        .insert_mock_post(first_seller.id, PostType::EvCar, PostStatus::Published)
        .await?;
    let _ = test
        .post()
        .insert_mock_post(second_seller.id, PostType::EvCar, PostStatus::Published)
        .await?;
    let bike = test
        .post()
        .insert_mock_post(second_seller.id, PostType::EvBike, PostStatus::Published)
        .await?;

    let post_repo = PostRepository::new(&test.db);
    let query = PostListQuery {
        post_type: Some(PostType::EvBike),
        seller_id: Some(second_seller.id),
        ..Default::default()
    };
    let result = post_repo.list(&query).await;

    assert!(result.is_ok());
    let posts = result.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, bike.id);

    Ok(())
}

/// Expect an unfiltered query to return every post newest first
#[tokio::test]
async fn orders_newest_first() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;
    let seller = test.account().insert_mock_account(1).await?;
    let older = test
        .post()
        .insert_mock_post(seller.id, PostType::EvCar, PostStatus::Draft)
        .await?;
    let newer = test
        .post()
        .insert_mock_post(seller.id, PostType::EvBike, PostStatus::Draft)
        .await?;

    let post_repo = PostRepository::new(&test.db);
    let result = post_repo.list(&PostListQuery::default()).await;

    assert!(result.is_ok());
    let posts = result.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, newer.id);
    assert_eq!(posts[1].id, older.id);

    Ok(())
}
