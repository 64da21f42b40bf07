use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::VerificationStatus;

/// Vehicle verification request for a listing, at most one per post. A post
/// with no row here simply never requested verification.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_verification")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub post_id: i32,
    pub status: VerificationStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub rejected_reason: Option<String>,
    pub requested_at: DateTime,
    pub reviewed_at: Option<DateTime>,
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
