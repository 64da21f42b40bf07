use sea_orm::entity::prelude::*;

/// Commission bracket `[min_price, max_price)`. A null `max_price` marks the
/// unbounded top tier. Active tiers must not overlap; the settings service
/// rejects writes that would violate that.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_tier")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub min_price: i64,
    pub max_price: Option<i64>,
    #[sea_orm(column_type = "Decimal(Some((5, 4)))")]
    pub deposit_rate: Decimal,
    pub active: bool,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
