use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_post::Post;

static FK_POST_BIKE_DETAILS_POST_ID: &str = "fk-post_bike_details-post_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostBikeDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PostBikeDetails::PostId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(integer(PostBikeDetails::BrandId))
                    .col(integer(PostBikeDetails::ModelId))
                    .col(integer(PostBikeDetails::ManufactureYear))
                    .col(string_null(PostBikeDetails::BikeStyle))
                    .col(string_len(PostBikeDetails::Origin, 16))
                    .col(string_null(PostBikeDetails::Color))
                    .col(string_null(PostBikeDetails::LicensePlate))
                    .col(integer_null(PostBikeDetails::OwnersCount))
                    .col(integer_null(PostBikeDetails::OdoKm))
                    .col(decimal_len_null(PostBikeDetails::BatteryCapacityKwh, 6, 2))
                    .col(integer_null(PostBikeDetails::RangeKm))
                    .col(decimal_len_null(PostBikeDetails::MotorPowerKw, 6, 2))
                    .col(decimal_len_null(PostBikeDetails::ChargeAcKw, 5, 2))
                    .col(decimal_len_null(PostBikeDetails::BatteryHealthPct, 5, 2))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_POST_BIKE_DETAILS_POST_ID)
                    .from_tbl(PostBikeDetails::Table)
                    .from_col(PostBikeDetails::PostId)
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
                    .name(FK_POST_BIKE_DETAILS_POST_ID)
                    .table(PostBikeDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PostBikeDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PostBikeDetails {
    Table,
    PostId,
    BrandId,
    ModelId,
    ManufactureYear,
    BikeStyle,
    Origin,
    Color,
    LicensePlate,
    OwnersCount,
    OdoKm,
    BatteryCapacityKwh,
    RangeKm,
    MotorPowerKw,
    ChargeAcKw,
    BatteryHealthPct,
}
