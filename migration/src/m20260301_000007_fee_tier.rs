use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeeTier::Table)
                    .if_not_exists()
                    .col(pk_auto(FeeTier::Id))
                    .col(big_integer(FeeTier::MinPrice))
                    .col(big_integer_null(FeeTier::MaxPrice))
                    .col(decimal_len(FeeTier::DepositRate, 5, 4))
                    .col(boolean(FeeTier::Active))
                    .col(timestamp(FeeTier::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeeTier::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FeeTier {
    Table,
    Id,
    MinPrice,
    MaxPrice,
    DepositRate,
    Active,
    UpdatedAt,
}
