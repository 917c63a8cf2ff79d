//! Generic record service: typed operations over the raw store.
//!
//! Every operation is one logical transaction. A mutation is a single
//! encode-then-put, so there is never a partially written record to roll
//! back. Nothing is cached across calls.

use ledgerkit_core::canonical::{self, Decoded};
use ledgerkit_core::key;
use ledgerkit_core::{LedgerRecord, Ownable, Patchable};
use ledgerkit_store::RecordStore;

use crate::context::TxContext;
use crate::error::{LedgerError, LedgerResult};

/// Typed CRUD over an injected [`RecordStore`].
///
/// Generic over the record's capabilities: any [`LedgerRecord`] gets
/// create/read/delete/exists/list, [`Patchable`] records get partial update,
/// [`Ownable`] records get ownership transfer. Authorization is the
/// facades' concern and happens before these methods run.
#[derive(Debug)]
pub struct RecordService<S> {
    store: S,
}

impl<S: RecordStore> RecordService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a new record, stamping provenance and creation time.
    ///
    /// Client-supplied stamp fields are overwritten wholesale; creator
    /// identity and timestamps are never client-controlled.
    pub async fn create<R: LedgerRecord>(&self, ctx: &TxContext, mut record: R) -> LedgerResult<R> {
        key::validate_id(record.id())?;
        let id = record.id().to_string();
        let store_key = key::record_key(R::KIND, &id);

        if self.store.get(&store_key).await?.is_some() {
            return Err(LedgerError::already_exists(R::KIND, id));
        }

        let now = ctx.timestamp_iso();
        let stamp = record.stamp_mut();
        stamp.type_tag = R::TYPE_TAG.to_string();
        stamp.creator_msp = ctx.identity.msp_id.clone();
        stamp.creator = ctx.identity.id.clone();
        stamp.created_at = now.clone();
        stamp.updated_at = now;

        self.store
            .put(&store_key, canonical::encode(&record)?)
            .await?;
        tracing::info!(kind = R::KIND, id = %id, "record created");
        Ok(record)
    }

    /// Fetch and decode a record.
    pub async fn read<R: LedgerRecord>(&self, id: &str) -> LedgerResult<R> {
        let store_key = key::record_key(R::KIND, id);
        let bytes = self
            .store
            .get(&store_key)
            .await?
            .ok_or_else(|| LedgerError::not_found(R::KIND, id))?;
        Ok(canonical::decode(&bytes)?)
    }

    /// Merge a partial update onto an existing record.
    ///
    /// The patch only reaches domain fields; kind tag, creator identity and
    /// `created_at` are preserved by construction, `updated_at` is refreshed.
    pub async fn update<R: Patchable>(
        &self,
        ctx: &TxContext,
        id: &str,
        patch: R::Patch,
    ) -> LedgerResult<R> {
        let mut record: R = self.read(id).await?;
        record.apply_patch(patch);
        record.stamp_mut().updated_at = ctx.timestamp_iso();

        let store_key = key::record_key(R::KIND, id);
        self.store
            .put(&store_key, canonical::encode(&record)?)
            .await?;
        tracing::info!(kind = R::KIND, id, "record updated");
        Ok(record)
    }

    /// Remove a record. Once deleted there is no trace left; re-creating the
    /// id is indistinguishable from original creation.
    pub async fn delete<R: LedgerRecord>(&self, id: &str) -> LedgerResult<()> {
        let store_key = key::record_key(R::KIND, id);
        if self.store.get(&store_key).await?.is_none() {
            return Err(LedgerError::not_found(R::KIND, id));
        }
        self.store.delete(&store_key).await?;
        tracing::info!(kind = R::KIND, id, "record deleted");
        Ok(())
    }

    /// Whether a record of kind `R` exists under `id`.
    pub async fn exists<R: LedgerRecord>(&self, id: &str) -> LedgerResult<bool> {
        self.exists_kind(R::KIND, id).await
    }

    /// Untyped existence probe for a `(kind, id)` pair.
    pub async fn exists_kind(&self, kind: &str, id: &str) -> LedgerResult<bool> {
        let store_key = key::record_key(kind, id);
        Ok(self.store.get(&store_key).await?.is_some())
    }

    /// Enumerate every record of kind `R`, in store key order.
    ///
    /// A malformed stored value degrades to [`Decoded::Raw`] instead of
    /// aborting the listing.
    pub async fn list_all<R: LedgerRecord>(&self) -> LedgerResult<Vec<Decoded<R>>> {
        let (start, end) = key::range_bounds(R::KIND);
        let mut scan = self.store.scan(&start, &end).await?;

        let mut records = Vec::new();
        while let Some(entry) = scan.next().await? {
            records.push(canonical::decode_or_raw(&entry.value));
        }
        scan.close().await?;
        Ok(records)
    }

    /// Swap the record's owner, returning the prior one.
    pub async fn transfer<R: Ownable>(
        &self,
        ctx: &TxContext,
        id: &str,
        new_owner: &str,
    ) -> LedgerResult<String> {
        let mut record: R = self.read(id).await?;
        let prior_owner = record.owner().to_string();
        record.set_owner(new_owner.to_string());
        record.stamp_mut().updated_at = ctx.timestamp_iso();

        let store_key = key::record_key(R::KIND, id);
        self.store
            .put(&store_key, canonical::encode(&record)?)
            .await?;
        tracing::info!(
            kind = R::KIND,
            id,
            from = %prior_owner,
            to = %new_owner,
            "ownership transferred"
        );
        Ok(prior_owner)
    }
}
