//! `ledgerkit-core` — record-model foundation building blocks.
//!
//! This crate contains the **pure** pieces of the ledger: deterministic
//! canonical encoding, key namespacing, and the capability traits that
//! describe what a stored record can do. No storage, no I/O.

pub mod canonical;
pub mod key;
pub mod record;

pub use canonical::{CodecError, Decoded, decode, decode_or_raw, encode};
pub use key::{KeyError, range_bounds, record_key, validate_id};
pub use record::{LedgerRecord, Ownable, Patchable, RecordStamp};
