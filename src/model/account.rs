use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{AccountRole, AccountStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account representation safe to return to clients; the password hash never
/// appears here.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: i32,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub role: AccountRole,
    pub status: AccountStatus,
    pub created_at: NaiveDateTime,
}

/// Signup payload. Exactly one of `email` / `phone` must be provided.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountDto {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: String,
    pub avatar_url: Option<String>,
}
