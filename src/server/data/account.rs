use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use entity::sea_orm_active_enums::{AccountRole, AccountStatus};

use crate::server::model::db::AccountModel;

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new member account.
    ///
    /// The caller is responsible for validating the contact fields and for
    /// hashing the password; this method stores what it is given.
    pub async fn create(
        &self,
        full_name: String,
        email: Option<String>,
        phone: Option<String>,
        password_hash: String,
        avatar_url: Option<String>,
    ) -> Result<AccountModel, DbErr> {
        let account = entity::account::ActiveModel {
            full_name: ActiveValue::Set(full_name),
            email: ActiveValue::Set(email),
            phone: ActiveValue::Set(phone),
            password_hash: ActiveValue::Set(password_hash),
            avatar_url: ActiveValue::Set(avatar_url),
            role: ActiveValue::Set(AccountRole::Member),
            status: ActiveValue::Set(AccountStatus::Active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    /// Gets an account by its ID
    pub async fn get(&self, account_id: i32) -> Result<Option<AccountModel>, DbErr> {
        entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await
    }

    /// Finds an account by its email address
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AccountModel>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds an account by its phone number
    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<AccountModel>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Phone.eq(phone))
            .one(self.db)
            .await
    }
}
