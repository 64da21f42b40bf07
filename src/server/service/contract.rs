//! Deposit contract settlement.
//!
//! Creating a contract freezes the assembled listing into an immutable JSON
//! snapshot and prices the deposit from the active fee tier covering the
//! listing price. Confirmation happens exactly once and stamps a SHA-256
//! integrity hash over the stored snapshot.

use sea_orm::{ActiveEnum, DatabaseConnection};
use serde_json::Value;
use sha2::{Digest, Sha256};

use entity::sea_orm_active_enums::PostStatus;

use crate::{
    model::contract::{ContractDto, CreateContractDto},
    server::{
        data::{
            account::AccountRepository, contract::ContractRepository, post::PostRepository,
            settings::fee_tier::FeeTierRepository,
        },
        error::{contract::ContractError, validation::ValidationError, Error},
        model::db::ContractModel,
        service::{post::assemble, settings::resolve},
    },
};

/// Service for deposit contract settlement.
pub struct ContractService<'a> {
    db: &'a DatabaseConnection,
}

fn invalid(field: &'static str, message: &str) -> Error {
    ContractError::Validation(ValidationError::new(field, message)).into()
}

fn contract_view(contract: ContractModel) -> ContractDto {
    ContractDto {
        id: contract.id,
        listing_id: contract.listing_id,
        buyer_id: contract.buyer_id,
        seller_id: contract.seller_id,
        file_path: contract.file_path,
        listing_snapshot: contract.listing_snapshot,
        fee_rate: contract.fee_rate,
        deposit_amount: contract.deposit_amount,
        confirmed_at: contract.confirmed_at,
        hash: contract.hash,
        signature_placeholder: contract.signature_placeholder,
        created_at: contract.created_at,
        updated_at: contract.updated_at,
    }
}

/// Hex-encoded SHA-256 over the snapshot's compact JSON encoding.
fn snapshot_hash(snapshot: &Value) -> Result<String, Error> {
    let bytes = serde_json::to_vec(snapshot)?;
    let digest = Sha256::digest(&bytes);

    Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
}

impl<'a> ContractService<'a> {
    /// Creates a new instance of [`ContractService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unconfirmed deposit contract for a published listing.
    ///
    /// Resolves the active fee tier covering the listing price, computes the
    /// deposit, and freezes the assembled listing as the contract's snapshot.
    ///
    /// # Arguments
    /// - `dto` - The listing and the buying account
    ///
    /// # Returns
    /// - `Ok(ContractDto)` - The recorded contract
    /// - `Err(Error::ContractError)` - Unknown listing or buyer, a listing
    ///   that is not published, a buyer who owns the listing, or a price no
    ///   active tier covers
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_contract(&self, dto: CreateContractDto) -> Result<ContractDto, Error> {
        let post_repo = PostRepository::new(self.db);
        let listing = post_repo
            .get(dto.listing_id)
            .await?
            .ok_or(ContractError::ListingNotFound(dto.listing_id))?;

        if listing.status != PostStatus::Published {
            return Err(ContractError::ListingNotPublished {
                id: dto.listing_id,
                status: listing.status.to_value(),
            }
            .into());
        }

        let account_repo = AccountRepository::new(self.db);
        if account_repo.get(dto.buyer_id).await?.is_none() {
            return Err(ContractError::BuyerNotFound(dto.buyer_id).into());
        }
        if dto.buyer_id == listing.seller_id {
            return Err(invalid("buyerId", "Buyer must differ from the seller"));
        }

        let active_tiers = FeeTierRepository::new(self.db).list_active().await?;
        let tier = resolve::resolve_tier(&active_tiers, listing.price)
            .ok_or(ContractError::NoFeeTier(listing.price))?;
        let fee_rate = tier.deposit_rate;

        let deposit_amount = resolve::deposit_amount(listing.price, fee_rate).ok_or_else(|| {
            Error::InternalError(format!(
                "Deposit for price {} at rate {fee_rate} does not fit an i64",
                listing.price
            ))
        })?;

        let aggregate = post_repo
            .get_aggregate(dto.listing_id)
            .await?
            .ok_or(ContractError::ListingNotFound(dto.listing_id))?;
        let listing_snapshot = serde_json::to_value(assemble::assemble(aggregate))?;

        let contract = ContractRepository::new(self.db)
            .create(
                dto.listing_id,
                dto.buyer_id,
                listing.seller_id,
                listing_snapshot,
                fee_rate,
                deposit_amount,
            )
            .await?;

        Ok(contract_view(contract))
    }

    /// Gets a contract by its ID.
    ///
    /// # Arguments
    /// - `contract_id` - ID of the contract to retrieve
    ///
    /// # Returns
    /// - `Ok(ContractDto)` - The stored contract
    /// - `Err(Error::ContractError)` - No contract has the given ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_contract(&self, contract_id: i32) -> Result<ContractDto, Error> {
        let contract_repo = ContractRepository::new(self.db);

        let contract = contract_repo
            .get(contract_id)
            .await?
            .ok_or(ContractError::NotFound(contract_id))?;

        Ok(contract_view(contract))
    }

    /// Confirms a contract, stamping the confirmation time and the snapshot
    /// integrity hash. A contract confirms at most once.
    ///
    /// # Arguments
    /// - `contract_id` - ID of the contract to confirm
    ///
    /// # Returns
    /// - `Ok(ContractDto)` - The confirmed contract
    /// - `Err(Error::ContractError)` - Unknown contract, or it was already
    ///   confirmed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn confirm_contract(&self, contract_id: i32) -> Result<ContractDto, Error> {
        let contract_repo = ContractRepository::new(self.db);
        let contract = contract_repo
            .get(contract_id)
            .await?
            .ok_or(ContractError::NotFound(contract_id))?;

        if contract.confirmed_at.is_some() {
            return Err(ContractError::AlreadyConfirmed(contract_id).into());
        }

        let hash = snapshot_hash(&contract.listing_snapshot)?;

        let contract = contract_repo.confirm(contract, hash).await?;

        Ok(contract_view(contract))
    }
}
