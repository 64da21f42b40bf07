use sea_orm::entity::prelude::*;

/// Settlement contract between a buyer and a seller over a published
/// listing. `listing_snapshot` freezes the assembled listing at creation
/// time; `confirmed_at` and `hash` are written exactly once on confirmation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contract")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub listing_id: i32,
    pub buyer_id: i32,
    pub seller_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub file_path: Option<String>,
    pub listing_snapshot: Json,
    #[sea_orm(column_type = "Decimal(Some((5, 4)))")]
    pub fee_rate: Decimal,
    pub deposit_amount: i64,
    pub confirmed_at: Option<DateTime>,
    pub hash: Option<String>,
    pub signature_placeholder: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::ListingId",
        to = "super::post::Column::Id"
    )]
    Listing,
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::BuyerId",
        to = "super::account::Column::Id"
    )]
    Buyer,
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::SellerId",
        to = "super::account::Column::Id"
    )]
    Seller,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
