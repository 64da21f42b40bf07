use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{PostStatus, PostType};

/// A vehicle listing. Address names are denormalized from the external
/// geography service at write time so reads never join against it. Price is
/// an integer amount in the smallest currency unit.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seller_id: i32,
    pub post_type: PostType,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub ward_code: Option<String>,
    pub province_name_cached: Option<String>,
    pub district_name_cached: Option<String>,
    pub ward_name_cached: Option<String>,
    pub address_text_cached: Option<String>,
    pub price: i64,
    pub is_negotiable: bool,
    pub status: PostStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub rejected_reason: Option<String>,
    pub submitted_at: Option<DateTime>,
    pub reviewed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::SellerId",
        to = "super::account::Column::Id"
    )]
    Seller,
    #[sea_orm(has_one = "super::post_car_details::Entity")]
    CarDetails,
    #[sea_orm(has_one = "super::post_bike_details::Entity")]
    BikeDetails,
    #[sea_orm(has_many = "super::post_image::Entity")]
    Images,
    #[sea_orm(has_one = "super::post_verification::Entity")]
    Verification,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl Related<super::post_car_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarDetails.def()
    }
}

impl Related<super::post_bike_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BikeDetails.def()
    }
}

impl Related<super::post_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::post_verification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Verification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
