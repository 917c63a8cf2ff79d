//! User registry: NGO, donor and bank operations with the deployment's
//! authorization policy.
//!
//! Policy table:
//! - NGO mutations and listing metadata: issuer `Org3MSP`, role `ngoAdmin`.
//! - Bank mutations **and** bank listing: issuer `Org2MSP`, role `govUser`.
//! - Donor operations: fully public (donors are self-service users).
//!
//! The gate always runs before caller-supplied fields are stamped or the
//! store is touched, so a rejected caller leaves no state change behind.

use ledgerkit_auth::{RoleRequirement, authorize};
use ledgerkit_core::canonical::Decoded;
use ledgerkit_store::RecordStore;

use crate::bank::{Bank, BankPatch};
use crate::context::TxContext;
use crate::donor::{Donor, DonorPatch};
use crate::error::LedgerResult;
use crate::ngo::{Ngo, NgoPatch};
use crate::service::RecordService;

fn ngo_admin() -> RoleRequirement {
    RoleRequirement::new(["Org3MSP"], "ngoAdmin")
}

fn gov_user() -> RoleRequirement {
    RoleRequirement::new(["Org2MSP"], "govUser")
}

/// Entity operations for the user-facing records (NGOs, donors, banks).
#[derive(Debug)]
pub struct UserRegistry<S> {
    service: RecordService<S>,
}

impl<S: RecordStore> UserRegistry<S> {
    pub fn new(store: S) -> Self {
        Self {
            service: RecordService::new(store),
        }
    }

    pub fn service(&self) -> &RecordService<S> {
        &self.service
    }

    // NGO operations (gated on the NGO admin policy).

    pub async fn register_ngo(&self, ctx: &TxContext, ngo: Ngo) -> LedgerResult<Ngo> {
        authorize(&ctx.identity, &ngo_admin())?;
        self.service.create(ctx, ngo).await
    }

    pub async fn get_ngo(&self, id: &str) -> LedgerResult<Ngo> {
        self.service.read(id).await
    }

    pub async fn update_ngo(&self, ctx: &TxContext, id: &str, patch: NgoPatch) -> LedgerResult<Ngo> {
        authorize(&ctx.identity, &ngo_admin())?;
        self.service.update(ctx, id, patch).await
    }

    pub async fn delete_ngo(&self, ctx: &TxContext, id: &str) -> LedgerResult<()> {
        authorize(&ctx.identity, &ngo_admin())?;
        self.service.delete::<Ngo>(id).await
    }

    pub async fn list_ngos(&self) -> LedgerResult<Vec<Decoded<Ngo>>> {
        self.service.list_all().await
    }

    // Donor operations (public; donors are self-service).

    pub async fn register_donor(&self, ctx: &TxContext, donor: Donor) -> LedgerResult<Donor> {
        self.service.create(ctx, donor).await
    }

    pub async fn get_donor(&self, id: &str) -> LedgerResult<Donor> {
        self.service.read(id).await
    }

    pub async fn update_donor(
        &self,
        ctx: &TxContext,
        id: &str,
        patch: DonorPatch,
    ) -> LedgerResult<Donor> {
        self.service.update(ctx, id, patch).await
    }

    pub async fn delete_donor(&self, _ctx: &TxContext, id: &str) -> LedgerResult<()> {
        self.service.delete::<Donor>(id).await
    }

    pub async fn list_donors(&self) -> LedgerResult<Vec<Decoded<Donor>>> {
        self.service.list_all().await
    }

    // Bank operations (gated on the government policy, listing included).

    pub async fn register_bank(&self, ctx: &TxContext, bank: Bank) -> LedgerResult<Bank> {
        authorize(&ctx.identity, &gov_user())?;
        self.service.create(ctx, bank).await
    }

    pub async fn get_bank(&self, id: &str) -> LedgerResult<Bank> {
        self.service.read(id).await
    }

    pub async fn update_bank(
        &self,
        ctx: &TxContext,
        id: &str,
        patch: BankPatch,
    ) -> LedgerResult<Bank> {
        authorize(&ctx.identity, &gov_user())?;
        self.service.update(ctx, id, patch).await
    }

    pub async fn delete_bank(&self, ctx: &TxContext, id: &str) -> LedgerResult<()> {
        authorize(&ctx.identity, &gov_user())?;
        self.service.delete::<Bank>(id).await
    }

    /// Listing banks is privileged, unlike the other kinds.
    pub async fn list_banks(&self, ctx: &TxContext) -> LedgerResult<Vec<Decoded<Bank>>> {
        authorize(&ctx.identity, &gov_user())?;
        self.service.list_all().await
    }

    /// Public existence probe for any `(kind, id)` pair.
    pub async fn exists(&self, kind: &str, id: &str) -> LedgerResult<bool> {
        self.service.exists_kind(kind, id).await
    }
}
