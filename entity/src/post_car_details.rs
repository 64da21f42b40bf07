use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::VehicleOrigin;

/// Car-specific attributes of a listing. Keyed by the post id so a post can
/// carry at most one car detail row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_car_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub post_id: i32,
    pub brand_id: i32,
    pub model_id: i32,
    pub manufacture_year: i32,
    pub body_style: Option<String>,
    pub origin: VehicleOrigin,
    pub color: Option<String>,
    pub seats: Option<i32>,
    pub license_plate: Option<String>,
    pub owners_count: Option<i32>,
    pub odo_km: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))", nullable)]
    pub battery_capacity_kwh: Option<Decimal>,
    pub range_km: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub charge_ac_kw: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub charge_dc_kw: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub battery_health_pct: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
