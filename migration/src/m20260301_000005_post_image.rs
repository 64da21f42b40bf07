use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_post::Post;

static IDX_POST_IMAGE_POST_ID: &str = "idx-post_image-post_id";
static FK_POST_IMAGE_POST_ID: &str = "fk-post_image-post_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostImage::Table)
                    .if_not_exists()
                    .col(pk_auto(PostImage::Id))
                    .col(integer(PostImage::PostId))
                    .col(string(PostImage::Url))
                    .col(integer(PostImage::SortOrder))
                    .col(timestamp(PostImage::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POST_IMAGE_POST_ID)
                    .table(PostImage::Table)
                    .col(PostImage::PostId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POST_IMAGE_POST_ID)
                    .from_tbl(PostImage::Table)
                    .from_col(PostImage::PostId)
                    .to_tbl(Post::Table)
                    .to_col(Post::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_POST_IMAGE_POST_ID)
                    .table(PostImage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POST_IMAGE_POST_ID)
                    .table(PostImage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PostImage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PostImage {
    Table,
    Id,
    PostId,
    Url,
    SortOrder,
    CreatedAt,
}
