use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_post::Post;

static FK_POST_VERIFICATION_POST_ID: &str = "fk-post_verification-post_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostVerification::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PostVerification::PostId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_len(PostVerification::Status, 16))
                    .col(text_null(PostVerification::RejectedReason))
                    .col(timestamp(PostVerification::RequestedAt))
                    .col(timestamp_null(PostVerification::ReviewedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POST_VERIFICATION_POST_ID)
                    .from_tbl(PostVerification::Table)
                    .from_col(PostVerification::PostId)
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
                    .name(FK_POST_VERIFICATION_POST_ID)
                    .table(PostVerification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PostVerification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PostVerification {
    Table,
    PostId,
    Status,
    RejectedReason,
    RequestedAt,
    ReviewedAt,
}
