use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_post::Post;

static FK_POST_CAR_DETAILS_POST_ID: &str = "fk-post_car_details-post_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostCarDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PostCarDetails::PostId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(integer(PostCarDetails::BrandId))
                    .col(integer(PostCarDetails::ModelId))
                    .col(integer(PostCarDetails::ManufactureYear))
                    .col(string_null(PostCarDetails::BodyStyle))
                    .col(string_len(PostCarDetails::Origin, 16))
                    .col(string_null(PostCarDetails::Color))
                    .col(integer_null(PostCarDetails::Seats))
                    .col(string_null(PostCarDetails::LicensePlate))
                    .col(integer_null(PostCarDetails::OwnersCount))
                    .col(integer_null(PostCarDetails::OdoKm))
                    .col(decimal_len_null(PostCarDetails::BatteryCapacityKwh, 6, 2))
                    .col(integer_null(PostCarDetails::RangeKm))
                    .col(decimal_len_null(PostCarDetails::ChargeAcKw, 5, 2))
                    .col(decimal_len_null(PostCarDetails::ChargeDcKw, 5, 2))
                    .col(decimal_len_null(PostCarDetails::BatteryHealthPct, 5, 2))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POST_CAR_DETAILS_POST_ID)
                    .from_tbl(PostCarDetails::Table)
                    .from_col(PostCarDetails::PostId)
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
                    .name(FK_POST_CAR_DETAILS_POST_ID)
                    .table(PostCarDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PostCarDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PostCarDetails {
    Table,
    PostId,
    BrandId,
    ModelId,
    ManufactureYear,
    BodyStyle,
    Origin,
    Color,
    Seats,
    LicensePlate,
    OwnersCount,
    OdoKm,
    BatteryCapacityKwh,
    RangeKm,
    ChargeAcKw,
    ChargeDcKw,
    BatteryHealthPct,
}
