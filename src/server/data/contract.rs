use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
};

use rust_decimal::Decimal;
use serde_json::Value;

use crate::server::model::db::ContractModel;

pub struct ContractRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContractRepository<'a, C> {
    /// Creates a new instance of [`ContractRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records an unconfirmed contract with the frozen listing snapshot and
    /// the resolved deposit terms.
    pub async fn create(
        &self,
        listing_id: i32,
        buyer_id: i32,
        seller_id: i32,
        listing_snapshot: Value,
        fee_rate: Decimal,
        deposit_amount: i64,
    ) -> Result<ContractModel, DbErr> {
        let contract = entity::contract::ActiveModel {
            listing_id: ActiveValue::Set(listing_id),
            buyer_id: ActiveValue::Set(buyer_id),
            seller_id: ActiveValue::Set(seller_id),
            file_path: ActiveValue::Set(None),
            listing_snapshot: ActiveValue::Set(listing_snapshot),
            fee_rate: ActiveValue::Set(fee_rate),
            deposit_amount: ActiveValue::Set(deposit_amount),
            confirmed_at: ActiveValue::Set(None),
            hash: ActiveValue::Set(None),
            signature_placeholder: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        contract.insert(self.db).await
    }

    /// Gets a contract by its ID
    pub async fn get(&self, contract_id: i32) -> Result<Option<ContractModel>, DbErr> {
        entity::prelude::Contract::find_by_id(contract_id)
            .one(self.db)
            .await
    }

    /// Stamps the confirmation time and integrity hash.
    ///
    /// The caller has already checked the contract is unconfirmed; these two
    /// fields are never written again.
    pub async fn confirm(
        &self,
        contract: ContractModel,
        hash: String,
    ) -> Result<ContractModel, DbErr> {
        let mut contract = contract.into_active_model();
        contract.confirmed_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        contract.hash = ActiveValue::Set(Some(hash));
        contract.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        contract.update(self.db).await
    }
}
