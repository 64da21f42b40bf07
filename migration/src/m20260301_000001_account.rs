use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACCOUNT_EMAIL: &str = "idx-account-email";
static IDX_ACCOUNT_PHONE: &str = "idx-account-phone";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string(Account::FullName))
                    .col(string_null(Account::Email))
                    .col(string_null(Account::Phone))
                    .col(string(Account::PasswordHash))
                    .col(string_null(Account::AvatarUrl))
                    .col(string_len(Account::Role, 16))
                    .col(string_len(Account::Status, 16))
                    .col(timestamp(Account::CreatedAt))
                    .col(timestamp(Account::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_EMAIL)
                    .table(Account::Table)
                    .col(Account::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_PHONE)
                    .table(Account::Table)
                    .col(Account::Phone)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_PHONE)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_EMAIL)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    FullName,
    Email,
    Phone,
    PasswordHash,
    AvatarUrl,
    Role,
    Status,
    CreatedAt,
    UpdatedAt,
}
