//! In-memory ordered store.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::interface::{RecordStore, Scan, ScanCursor, ScanEntry, StoreError};

/// Ordered in-memory key-value store backed by a `BTreeMap`.
///
/// Mirrors the substrate's conventions: a zero-length value is
/// indistinguishable from an absent key.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-empty) entries. Test helper.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .map(|m| m.values().filter(|v| !v.is_empty()).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(entries.get(key).filter(|v| !v.is_empty()).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        // Absent key: nothing to do, not an error.
        entries.remove(key);
        Ok(())
    }

    async fn scan(&self, start: &str, end: &str) -> Result<Scan, StoreError> {
        // BTreeMap::range panics on reversed bounds; an inverted interval is
        // simply empty here.
        if start >= end {
            return Ok(Box::new(MemoryScan {
                snapshot: Vec::new(),
                position: 0,
            }));
        }

        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        // Snapshot the range under the read lock; the cursor then lives
        // independently of later mutations.
        let snapshot: Vec<ScanEntry> = entries
            .range::<str, _>((Bound::Included(start), Bound::Excluded(end)))
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| ScanEntry {
                key: k.clone(),
                value: v.clone(),
            })
            .collect();

        tracing::debug!(start, end, entries = snapshot.len(), "scan opened");
        Ok(Box::new(MemoryScan {
            snapshot,
            position: 0,
        }))
    }
}

/// Cursor over a materialized range snapshot.
struct MemoryScan {
    snapshot: Vec<ScanEntry>,
    position: usize,
}

#[async_trait]
impl ScanCursor for MemoryScan {
    async fn next(&mut self) -> Result<Option<ScanEntry>, StoreError> {
        let entry = self.snapshot.get(self.position).cloned();
        if entry.is_some() {
            self.position += 1;
        }
        Ok(entry)
    }

    async fn close(&mut self) -> Result<(), StoreError> {
        // Drop the snapshot now rather than whenever the box goes away.
        self.snapshot = Vec::new();
        self.position = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_none_for_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_then_get_roundtrips() {
        let store = MemoryStore::new();
        store.put("k1", b"v1".to_vec()).await.unwrap();
        assert_eq!(store.get("k1").await.unwrap(), Some(b"v1".to_vec()));
    }

    #[tokio::test]
    async fn put_overwrites_unconditionally() {
        let store = MemoryStore::new();
        store.put("k1", b"old".to_vec()).await.unwrap();
        store.put("k1", b"new".to_vec()).await.unwrap();
        assert_eq!(store.get("k1").await.unwrap(), Some(b"new".to_vec()));
    }

    #[tokio::test]
    async fn empty_value_reads_as_absent() {
        let store = MemoryStore::new();
        store.put("k1", Vec::new()).await.unwrap();
        assert_eq!(store.get("k1").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_is_a_noop_on_absent_keys() {
        let store = MemoryStore::new();
        store.delete("never-there").await.unwrap();
        store.put("k1", b"v".to_vec()).await.unwrap();
        store.delete("k1").await.unwrap();
        assert_eq!(store.get("k1").await.unwrap(), None);
    }

    async fn collect(mut scan: Scan) -> Vec<String> {
        let mut keys = Vec::new();
        while let Some(entry) = scan.next().await.unwrap() {
            keys.push(entry.key);
        }
        keys
    }

    #[tokio::test]
    async fn scan_is_half_open_and_ordered() {
        let store = MemoryStore::new();
        for key in ["bank:b", "bank:a", "bank;", "bank:", "atm:z", "card:a"] {
            store.put(key, b"v".to_vec()).await.unwrap();
        }

        let scan = store.scan("bank:", "bank;").await.unwrap();
        // Start key included, end key excluded, ascending order.
        assert_eq!(collect(scan).await, vec!["bank:", "bank:a", "bank:b"]);
    }

    #[tokio::test]
    async fn scan_reflects_a_snapshot_at_open_time() {
        let store = MemoryStore::new();
        store.put("k:a", b"1".to_vec()).await.unwrap();
        store.put("k:b", b"2".to_vec()).await.unwrap();

        let mut scan = store.scan("k:", "k;").await.unwrap();
        let first = scan.next().await.unwrap().unwrap();
        assert_eq!(first.key, "k:a");

        // Mutations after open never corrupt already-yielded entries or the
        // remainder of this cursor.
        store.put("k:c", b"3".to_vec()).await.unwrap();
        store.delete("k:b").await.unwrap();

        let second = scan.next().await.unwrap().unwrap();
        assert_eq!(second.key, "k:b");
        assert_eq!(second.value, b"2".to_vec());
        assert_eq!(scan.next().await.unwrap(), None);
    }

    #[tokio::test]
    async fn scan_is_restartable() {
        let store = MemoryStore::new();
        store.put("k:a", b"1".to_vec()).await.unwrap();

        let mut first = store.scan("k:", "k;").await.unwrap();
        first.next().await.unwrap();
        assert_eq!(first.next().await.unwrap(), None);

        // A fresh scan starts from the beginning and sees current state.
        store.put("k:b", b"2".to_vec()).await.unwrap();
        let fresh = store.scan("k:", "k;").await.unwrap();
        assert_eq!(collect(fresh).await, vec!["k:a", "k:b"]);
    }

    #[tokio::test]
    async fn closed_cursor_yields_nothing() {
        let store = MemoryStore::new();
        store.put("k:a", b"1".to_vec()).await.unwrap();
        store.put("k:b", b"2".to_vec()).await.unwrap();

        let mut scan = store.scan("k:", "k;").await.unwrap();
        assert!(scan.next().await.unwrap().is_some());
        scan.close().await.unwrap();
        assert_eq!(scan.next().await.unwrap(), None);
        // close is idempotent
        scan.close().await.unwrap();
    }

    #[tokio::test]
    async fn reversed_bounds_scan_is_empty() {
        let store = MemoryStore::new();
        store.put("k:a", b"1".to_vec()).await.unwrap();
        let scan = store.scan("k;", "k:").await.unwrap();
        assert!(collect(scan).await.is_empty());
    }

    #[tokio::test]
    async fn scan_over_empty_range_yields_nothing() {
        let store = MemoryStore::new();
        store.put("other:a", b"1".to_vec()).await.unwrap();
        let scan = store.scan("k:", "k;").await.unwrap();
        assert!(collect(scan).await.is_empty());
    }
}
