//! `ledgerkit-ledger` — typed entity services over the record store.
//!
//! Entities (assets, NGOs, donors, banks) are concrete structs sharing a
//! provenance stamp; the generic [`RecordService`] composes canonical
//! encoding, key namespacing and the store into create/read/update/delete/
//! exists/list/transfer operations; the contract facades add each
//! deployment's authorization policy on top.

pub mod asset;
pub mod asset_ledger;
pub mod bank;
pub mod context;
pub mod donor;
pub mod error;
pub mod ngo;
pub mod registry;
pub mod service;

pub use asset::{Asset, AssetPatch};
pub use asset_ledger::AssetLedger;
pub use bank::{Bank, BankPatch};
pub use context::TxContext;
pub use donor::{Donor, DonorPatch};
pub use error::{LedgerError, LedgerResult};
pub use ngo::{Ngo, NgoPatch};
pub use registry::UserRegistry;
pub use service::RecordService;
