//! `ledgerkit-store` — the ordered key-value abstraction behind the ledger.
//!
//! One trait, two worlds: tests and local development run against the
//! in-memory ordered store; production wires in an adapter over the real
//! ledger substrate. Callers inject the implementation — there is no
//! module-level shared state.

pub mod interface;
pub mod memory;

pub use interface::{RecordStore, Scan, ScanCursor, ScanEntry, StoreError};
pub use memory::MemoryStore;
