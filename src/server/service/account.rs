use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    model::account::{AccountDto, CreateAccountDto},
    server::{
        data::account::AccountRepository,
        error::{account::AccountError, validation::ValidationError, Error},
        model::db::AccountModel,
    },
};

/// Service for marketplace account signup and lookup.
///
/// Signup runs the full validation matrix before any row is written and
/// stores the password as an Argon2 hash. Reads only ever leave through the
/// safe view, which carries no credential material.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

fn invalid(field: &'static str, message: &str) -> Error {
    AccountError::Validation(ValidationError::new(field, message)).into()
}

fn email_is_well_formed(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

fn phone_is_well_formed(phone: &str) -> bool {
    (9..=11).contains(&phone.len()) && phone.chars().all(|c| c.is_ascii_digit())
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of [`AccountService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Exactly one contact mode must be used: an email address or a phone
    /// number, never both. All validation failures are field-level and
    /// nothing is written when any check fails.
    ///
    /// # Arguments
    /// - `dto` - Signup payload
    ///
    /// # Returns
    /// - `Ok(AccountDto)` - Safe view of the created account
    /// - `Err(Error::AccountError)` - A validation check rejected the payload
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_account(&self, dto: CreateAccountDto) -> Result<AccountDto, Error> {
        let full_name = dto.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(invalid("fullName", "Full name is required"));
        }

        let email = dto
            .email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string);
        let phone = dto
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .map(str::to_string);

        match (&email, &phone) {
            (None, None) => {
                return Err(invalid(
                    "email",
                    "Either an email address or a phone number is required",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(invalid(
                    "email",
                    "Provide either an email address or a phone number, not both",
                ));
            }
            _ => (),
        }

        if let Some(email) = &email {
            if !email_is_well_formed(email) {
                return Err(invalid("email", "Email address is not valid"));
            }
        }
        if let Some(phone) = &phone {
            if !phone_is_well_formed(phone) {
                return Err(invalid("phone", "Phone number must be 9 to 11 digits"));
            }
        }

        if dto.password.chars().count() < 8 {
            return Err(invalid(
                "password",
                "Password must be at least 8 characters long",
            ));
        }

        let account_repo = AccountRepository::new(self.db);

        if let Some(email) = &email {
            if account_repo.find_by_email(email).await?.is_some() {
                return Err(invalid("email", "Email address is already in use"));
            }
        }
        if let Some(phone) = &phone {
            if account_repo.find_by_phone(phone).await?.is_some() {
                return Err(invalid("phone", "Phone number is already in use"));
            }
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(dto.password.as_bytes(), &salt)?
            .to_string();

        let account = account_repo
            .create(full_name, email, phone, password_hash, dto.avatar_url)
            .await?;

        Ok(Self::safe_view(account))
    }

    /// Gets the safe view of an account.
    ///
    /// # Arguments
    /// - `account_id` - ID of the account to retrieve
    ///
    /// # Returns
    /// - `Ok(AccountDto)` - Safe view of the account
    /// - `Err(Error::AccountError)` - No account has the given ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_account(&self, account_id: i32) -> Result<AccountDto, Error> {
        let account_repo = AccountRepository::new(self.db);

        let account = account_repo
            .get(account_id)
            .await?
            .ok_or(AccountError::NotFound(account_id))?;

        Ok(Self::safe_view(account))
    }

    /// Strips an account row down to the fields clients may see.
    pub fn safe_view(account: AccountModel) -> AccountDto {
        AccountDto {
            id: account.id,
            full_name: account.full_name,
            email: account.email,
            phone: account.phone,
            avatar_url: account.avatar_url,
            role: account.role,
            status: account.status,
            created_at: account.created_at,
        }
    }
}
