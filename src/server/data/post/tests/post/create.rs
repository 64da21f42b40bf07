use sea_orm::{DbErr, RuntimeErr};

use super::*;

/// Expect Ok with a DRAFT post carrying the trimmed title
#[tokio::test]
async fn creates_draft_post() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;
    let seller = test.account().insert_mock_account(1).await?;

    let mut dto = mock_create_post_dto(seller.id, PostType::EvCar);
    dto.title = "  VinFast VF 8 Eco 2022  ".to_string();

    let post_repo = PostRepository::new(&test.db);
    let result = post_repo.create(&dto).await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.seller_id, seller.id);
    assert_eq!(created.status, PostStatus::Draft);
    assert_eq!(created.title, "VinFast VF 8 Eco 2022");
    assert_eq!(created.price, dto.price);
    assert_eq!(created.submitted_at, None);

    Ok(())
}

/// Expect Error when the seller id references no account
#[tokio::test]
async fn fails_for_unknown_seller() -> Result<(), TestError> {
    let mut test = test_setup_with_post_tables!()?;
    let _ = test.account().insert_mock_account(1).await?;

    let dto = mock_create_post_dto(42, PostType::EvCar);

    let post_repo = PostRepository::new(&test.db);
    let result = post_repo.create(&dto).await;

    assert!(result.is_err());
    // Assert error code is 787 indicating a foreign key constraint error
    assert!(matches!(
        result,
        Err(DbErr::Query(RuntimeErr::SqlxError(err))) if err
            .as_database_error()
            .and_then(|d| d.code().map(|c| c == "787"))
            .unwrap_or(false)
    ));

    Ok(())
}
