use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_account::Account;

static IDX_POST_SELLER_ID: &str = "idx-post-seller_id";
static IDX_POST_STATUS: &str = "idx-post-status";
static FK_POST_SELLER_ID: &str = "fk-post-seller_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(integer(Post::SellerId))
                    .col(string_len(Post::PostType, 16))
                    .col(string(Post::Title))
                    .col(text_null(Post::Description))
                    .col(string_null(Post::WardCode))
                    .col(string_null(Post::ProvinceNameCached))
                    .col(string_null(Post::DistrictNameCached))
                    .col(string_null(Post::WardNameCached))
                    .col(string_null(Post::AddressTextCached))
                    .col(big_integer(Post::Price))
                    .col(boolean(Post::IsNegotiable))
                    .col(string_len(Post::Status, 16))
                    .col(text_null(Post::RejectedReason))
                    .col(timestamp_null(Post::SubmittedAt))
                    .col(timestamp_null(Post::ReviewedAt))
                    .col(timestamp(Post::CreatedAt))
                    .col(timestamp(Post::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POST_SELLER_ID)
                    .table(Post::Table)
                    .col(Post::SellerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POST_STATUS)
                    .table(Post::Table)
                    .col(Post::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POST_SELLER_ID)
                    .from_tbl(Post::Table)
                    .from_col(Post::SellerId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_POST_SELLER_ID)
                    .table(Post::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POST_STATUS)
                    .table(Post::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POST_SELLER_ID)
                    .table(Post::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    SellerId,
    PostType,
    Title,
    Description,
    WardCode,
    ProvinceNameCached,
    DistrictNameCached,
    WardNameCached,
    AddressTextCached,
    Price,
    IsNegotiable,
    Status,
    RejectedReason,
    SubmittedAt,
    ReviewedAt,
    CreatedAt,
    UpdatedAt,
}
