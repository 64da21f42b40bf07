use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AccountRole, AccountStatus};

/// Marketplace account. Exactly one of `email` / `phone` is set, depending on
/// which contact mode was used at signup. `password_hash` never leaves the
/// data layer; responses go through the safe view in the DTO model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    #[sea_orm(unique, nullable)]
    pub email: Option<String>,
    #[sea_orm(unique, nullable)]
    pub phone: Option<String>,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub role: AccountRole,
    pub status: AccountStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
