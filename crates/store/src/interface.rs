//! Store trait and scan cursor contract.

use async_trait::async_trait;
use thiserror::Error;

/// Store operation error.
///
/// These are **infrastructure** failures (backend unavailable, poisoned lock,
/// broken iterator). Domain failures (missing record, duplicate id) are not
/// represented here: absence is `None`, and delete of an absent key is a
/// no-op.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// One key-value pair yielded by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub key: String,
    pub value: Vec<u8>,
}

/// Pull-based cursor over an ascending key range.
///
/// Cursors reflect a consistent snapshot of the keys existing when the scan
/// was opened; a fresh `scan` call never inherits position from a previous
/// one. Implementations must release whatever they hold when the cursor is
/// dropped, so a consumer that stops early (or bails with an error) leaks
/// nothing. `close` is the explicit, idempotent form of the same release.
#[async_trait]
pub trait ScanCursor: Send {
    /// Next entry in ascending key order, or `None` once exhausted or closed.
    async fn next(&mut self) -> Result<Option<ScanEntry>, StoreError>;

    /// Release held resources now. Subsequent `next` calls yield `None`.
    async fn close(&mut self) -> Result<(), StoreError>;
}

/// Boxed cursor handed out by [`RecordStore::scan`].
pub type Scan = Box<dyn ScanCursor>;

/// Ordered key-value store with half-open range scans.
///
/// Absence is a value, not an error: `get` on a missing key returns `None`,
/// `delete` on a missing key succeeds. The backing substrate provides
/// per-key atomicity and per-invocation serializability; this trait adds
/// nothing on top.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the bytes under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Unconditional overwrite of `key`.
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Remove `key`; succeeds whether or not it was present.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Open an ascending scan over `[start, end)`.
    async fn scan(&self, start: &str, end: &str) -> Result<Scan, StoreError>;
}
