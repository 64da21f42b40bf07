//! Marketplace settings administration.
//!
//! Fee tiers are commission brackets over listing prices; the active set must
//! never overlap so any price resolves to at most one tier. Bracket checks
//! run here at write time, the pure resolution math lives in [`resolve`].

pub mod refund_policy;
pub mod resolve;


use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::settings::{FeeTierDto, SaveFeeTierDto},
    server::{
        data::settings::fee_tier::FeeTierRepository,
        error::{settings::SettingsError, validation::ValidationError, Error},
        model::db::FeeTierModel,
    },
};

/// Service for fee tier and refund policy administration.
pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

fn invalid(field: &'static str, message: impl Into<String>) -> Error {
    SettingsError::Validation(ValidationError::new(field, message)).into()
}

fn tier_view(tier: FeeTierModel) -> FeeTierDto {
    FeeTierDto {
        id: tier.id,
        min_price: tier.min_price,
        max_price: tier.max_price,
        deposit_rate: tier.deposit_rate,
        active: tier.active,
        updated_at: tier.updated_at,
    }
}

/// Checks a tier payload's bracket and rate in isolation.
fn check_bracket(dto: &SaveFeeTierDto) -> Result<(), Error> {
    if dto.min_price < 0 {
        return Err(invalid("minPrice", "Bracket start must not be negative"));
    }
    if let Some(max_price) = dto.max_price {
        if max_price <= dto.min_price {
            return Err(invalid(
                "maxPrice",
                "Bracket end must be greater than its start",
            ));
        }
    }
    if dto.deposit_rate < Decimal::ZERO || dto.deposit_rate > Decimal::ONE {
        return Err(invalid("depositRate", "Deposit rate must be between 0 and 1"));
    }

    Ok(())
}

/// Checks the payload's bracket against the other active tiers. Prices must
/// resolve to at most one active tier, so an overlap is rejected up front.
fn check_overlap(dto: &SaveFeeTierDto, others: &[FeeTierModel]) -> Result<(), Error> {
    for other in others {
        if resolve::brackets_overlap(
            (dto.min_price, dto.max_price),
            (other.min_price, other.max_price),
        ) {
            return Err(invalid(
                "minPrice",
                format!("Bracket overlaps active fee tier ID {}", other.id),
            ));
        }
    }

    Ok(())
}

impl<'a> SettingsService<'a> {
    /// Creates a new instance of [`SettingsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every fee tier ascending by bracket start, inactive included.
    pub async fn list_fee_tiers(&self) -> Result<Vec<FeeTierDto>, Error> {
        let tier_repo = FeeTierRepository::new(self.db);

        let tiers = tier_repo.list().await?;

        Ok(tiers.into_iter().map(tier_view).collect())
    }

    /// Creates a fee tier after bracket and overlap validation.
    ///
    /// # Arguments
    /// - `dto` - Bracket, rate, and optional active flag (defaults to true)
    ///
    /// # Returns
    /// - `Ok(FeeTierDto)` - The created tier
    /// - `Err(Error::SettingsError)` - The bracket or rate is invalid, or the
    ///   bracket overlaps another active tier
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_fee_tier(&self, dto: SaveFeeTierDto) -> Result<FeeTierDto, Error> {
        check_bracket(&dto)?;

        let tier_repo = FeeTierRepository::new(self.db);

        if dto.active.unwrap_or(true) {
            let active_tiers = tier_repo.list_active().await?;
            check_overlap(&dto, &active_tiers)?;
        }

        let tier = tier_repo.create(&dto).await?;

        Ok(tier_view(tier))
    }

    /// Replaces a fee tier's bracket, rate, and active flag.
    ///
    /// The overlap check skips the tier being updated, so a bracket may be
    /// widened or narrowed in place.
    ///
    /// # Arguments
    /// - `tier_id` - ID of the tier to update
    /// - `dto` - Replacement bracket and rate; a missing `active` flag keeps
    ///   the stored value
    ///
    /// # Returns
    /// - `Ok(FeeTierDto)` - The updated tier
    /// - `Err(Error::SettingsError)` - Unknown tier, invalid bracket or rate,
    ///   or an overlap with another active tier
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_fee_tier(
        &self,
        tier_id: i32,
        dto: SaveFeeTierDto,
    ) -> Result<FeeTierDto, Error> {
        check_bracket(&dto)?;

        let tier_repo = FeeTierRepository::new(self.db);
        let tier = tier_repo
            .get(tier_id)
            .await?
            .ok_or(SettingsError::FeeTierNotFound(tier_id))?;

        if dto.active.unwrap_or(tier.active) {
            let other_active_tiers: Vec<FeeTierModel> = tier_repo
                .list_active()
                .await?
                .into_iter()
                .filter(|other| other.id != tier_id)
                .collect();
            check_overlap(&dto, &other_active_tiers)?;
        }

        let tier = tier_repo.update(tier, &dto).await?;

        Ok(tier_view(tier))
    }

    /// Deletes a fee tier.
    ///
    /// # Arguments
    /// - `tier_id` - ID of the tier to delete
    ///
    /// # Returns
    /// - `Ok(())` - The tier is gone
    /// - `Err(Error::SettingsError)` - No tier has the given ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_fee_tier(&self, tier_id: i32) -> Result<(), Error> {
        let tier_repo = FeeTierRepository::new(self.db);

        let result = tier_repo.delete(tier_id).await?;
        if result.rows_affected == 0 {
            return Err(SettingsError::FeeTierNotFound(tier_id).into());
        }

        Ok(())
    }
}
