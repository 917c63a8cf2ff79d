//! Asset ledger: fully public asset CRUD plus ownership transfer.
//!
//! Assets carry no per-operation policy in this deployment; any verified
//! caller may create, mutate and enumerate them.

use ledgerkit_core::canonical::Decoded;
use ledgerkit_store::RecordStore;

use crate::asset::{Asset, AssetPatch};
use crate::context::TxContext;
use crate::error::LedgerResult;
use crate::service::RecordService;

/// Public asset operations over an injected store.
#[derive(Debug)]
pub struct AssetLedger<S> {
    service: RecordService<S>,
}

impl<S: RecordStore> AssetLedger<S> {
    pub fn new(store: S) -> Self {
        Self {
            service: RecordService::new(store),
        }
    }

    pub fn service(&self) -> &RecordService<S> {
        &self.service
    }

    pub async fn create_asset(
        &self,
        ctx: &TxContext,
        id: &str,
        color: &str,
        size: u64,
        owner: &str,
        appraised_value: u64,
    ) -> LedgerResult<Asset> {
        self.service
            .create(ctx, Asset::new(id, color, size, owner, appraised_value))
            .await
    }

    pub async fn read_asset(&self, id: &str) -> LedgerResult<Asset> {
        self.service.read(id).await
    }

    pub async fn update_asset(
        &self,
        ctx: &TxContext,
        id: &str,
        patch: AssetPatch,
    ) -> LedgerResult<Asset> {
        self.service.update(ctx, id, patch).await
    }

    pub async fn delete_asset(&self, id: &str) -> LedgerResult<()> {
        self.service.delete::<Asset>(id).await
    }

    pub async fn asset_exists(&self, id: &str) -> LedgerResult<bool> {
        self.service.exists::<Asset>(id).await
    }

    pub async fn get_all_assets(&self) -> LedgerResult<Vec<Decoded<Asset>>> {
        self.service.list_all().await
    }

    /// Transfer ownership, returning the prior owner.
    pub async fn transfer_asset(
        &self,
        ctx: &TxContext,
        id: &str,
        new_owner: &str,
    ) -> LedgerResult<String> {
        self.service.transfer::<Asset>(ctx, id, new_owner).await
    }

    /// Seed the ledger with the canonical sample assets.
    ///
    /// Fails with `AlreadyExists` if any of the sample ids is already taken.
    pub async fn init_ledger(&self, ctx: &TxContext) -> LedgerResult<()> {
        let samples = [
            Asset::new("asset1", "blue", 5, "Tomoko", 300),
            Asset::new("asset2", "red", 5, "Brad", 400),
            Asset::new("asset3", "green", 10, "Jin Soo", 500),
            Asset::new("asset4", "yellow", 10, "Max", 600),
            Asset::new("asset5", "black", 15, "Adriana", 700),
            Asset::new("asset6", "white", 15, "Michel", 800),
        ];
        for asset in samples {
            self.service.create(ctx, asset).await?;
        }
        Ok(())
    }
}
