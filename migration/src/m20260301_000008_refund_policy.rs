use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RefundPolicy::Table)
                    .if_not_exists()
                    .col(pk_auto(RefundPolicy::Id))
                    .col(decimal_len(RefundPolicy::RefundPercent, 5, 4))
                    .col(integer(RefundPolicy::CancelWindowHours))
                    .col(text_null(RefundPolicy::Description))
                    .col(timestamp(RefundPolicy::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RefundPolicy::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RefundPolicy {
    Table,
    Id,
    RefundPercent,
    CancelWindowHours,
    Description,
    UpdatedAt,
}
