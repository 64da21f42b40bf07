use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_account::Account;

static IDX_CONTRACT_LISTING_ID: &str = "idx-contract-listing_id";
static FK_CONTRACT_BUYER_ID: &str = "fk-contract-buyer_id";
static FK_CONTRACT_SELLER_ID: &str = "fk-contract-seller_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contract::Table)
                    .if_not_exists()
                    .col(pk_auto(Contract::Id))
                    .col(integer(Contract::ListingId))
                    .col(integer(Contract::BuyerId))
                    .col(integer(Contract::SellerId))
                    .col(text_null(Contract::FilePath))
                    .col(json_binary(Contract::ListingSnapshot))
                    .col(decimal_len(Contract::FeeRate, 5, 4))
                    .col(big_integer(Contract::DepositAmount))
                    .col(timestamp_null(Contract::ConfirmedAt))
                    .col(string_null(Contract::Hash))
                    .col(string_null(Contract::SignaturePlaceholder))
                    .col(timestamp(Contract::CreatedAt))
                    .col(timestamp(Contract::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRACT_LISTING_ID)
                    .table(Contract::Table)
                    .col(Contract::ListingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONTRACT_BUYER_ID)
                    .from_tbl(Contract::Table)
                    .from_col(Contract::BuyerId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONTRACT_SELLER_ID)
                    .from_tbl(Contract::Table)
                    .from_col(Contract::SellerId)
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
                    .name(FK_CONTRACT_SELLER_ID)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONTRACT_BUYER_ID)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRACT_LISTING_ID)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Contract::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Contract {
    Table,
    Id,
    ListingId,
    BuyerId,
    SellerId,
    FilePath,
    ListingSnapshot,
    FeeRate,
    DepositAmount,
    ConfirmedAt,
    Hash,
    SignaturePlaceholder,
    CreatedAt,
    UpdatedAt,
}
