//! In-memory reference backend.
//!
//! Rows live in `BTreeMap`s behind an `RwLock`, which makes the bytewise
//! ordering contract trivially correct and keeps the backend useful as the
//! executable reference for the store semantics. Managers share their
//! row-spaces through `Arc`s, so cloning a manager models reconnecting to
//! the same backend in tests.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::{Arc, RwLock};

use rookdb_core::types::{Entry, StaticBuffer};

use crate::kcv::{
    ConsistencyLevel, KeyColumnValueStore, KeyIterator, Mutation, SliceQuery, StorageError,
    StorageResult, StoreFeatures, StoreManager, StoreTransaction,
};

/// One key's row: columns mapped to values in sorted order.
type Row = BTreeMap<StaticBuffer, StaticBuffer>;

/// The ordered row-space of one named store.
type RowSpace = RwLock<BTreeMap<StaticBuffer, Row>>;

/// Manager for the in-memory backend.
///
/// Clones share the same row-spaces; `close` is a no-op since there is no
/// connection to release. Mutations apply immediately and irrevocably, so
/// the backend declares no abort support.
#[derive(Debug, Clone)]
pub struct MemoryStoreManager {
    stores: Arc<RwLock<HashMap<String, Arc<RowSpace>>>>,
    features: StoreFeatures,
}

impl MemoryStoreManager {
    /// Create an empty backend with the standard in-memory feature set:
    /// scans and ordered keys, no abort, no partition awareness.
    #[must_use]
    pub fn new() -> Self {
        Self::with_features(StoreFeatures::new().scan(true).ordered(true))
    }

    /// Create an empty backend with a custom capability declaration.
    ///
    /// Lets tests exercise the unsupported-capability paths of the
    /// contract against a real store.
    #[must_use]
    pub fn with_features(features: StoreFeatures) -> Self {
        Self { stores: Arc::new(RwLock::new(HashMap::new())), features }
    }

    fn row_space(&self, name: &str) -> Arc<RowSpace> {
        let mut stores = self.stores.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        Arc::clone(stores.entry(name.to_owned()).or_default())
    }
}

impl Default for MemoryStoreManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreManager for MemoryStoreManager {
    type Store = MemoryStore;

    fn open_database(&self, name: &str) -> StorageResult<Self::Store> {
        if name.is_empty() {
            return Err(StorageError::InvalidName("store name must be non-empty".into()));
        }
        Ok(MemoryStore {
            name: name.to_owned(),
            rows: self.row_space(name),
            features: self.features,
        })
    }

    fn begin_transaction(&self, level: ConsistencyLevel) -> StorageResult<StoreTransaction> {
        Ok(StoreTransaction::new(level))
    }

    fn features(&self) -> StoreFeatures {
        self.features
    }

    fn clear_storage(&self) -> StorageResult<()> {
        tracing::debug!("clearing in-memory storage");
        let stores = self.stores.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        // Empty each row-space in place so already-open handles observe the
        // wipe as well.
        for rows in stores.values() {
            rows.write().unwrap_or_else(std::sync::PoisonError::into_inner).clear();
        }
        Ok(())
    }

    fn close(&self) -> StorageResult<()> {
        Ok(())
    }
}

/// A named store in the in-memory backend.
#[derive(Debug)]
pub struct MemoryStore {
    name: String,
    rows: Arc<RowSpace>,
    features: StoreFeatures,
}

impl KeyColumnValueStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains_key(&self, key: &StaticBuffer, _tx: &StoreTransaction) -> StorageResult<bool> {
        let rows = self.rows.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(rows.get(key).is_some_and(|row| !row.is_empty()))
    }

    fn contains_key_column(
        &self,
        key: &StaticBuffer,
        column: &StaticBuffer,
        _tx: &StoreTransaction,
    ) -> StorageResult<bool> {
        let rows = self.rows.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(rows.get(key).is_some_and(|row| row.contains_key(column)))
    }

    fn get(
        &self,
        key: &StaticBuffer,
        column: &StaticBuffer,
        _tx: &StoreTransaction,
    ) -> StorageResult<Option<StaticBuffer>> {
        let rows = self.rows.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(rows.get(key).and_then(|row| row.get(column).cloned()))
    }

    fn get_slice(
        &self,
        key: &StaticBuffer,
        query: &SliceQuery,
        _tx: &StoreTransaction,
    ) -> StorageResult<Vec<Entry>> {
        if query.is_vacuous() {
            return Ok(Vec::new());
        }
        let rows = self.rows.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        let Some(row) = rows.get(key) else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        let range = (Bound::Included(query.start()), Bound::Excluded(query.end()));
        for (column, value) in row.range::<StaticBuffer, _>(range) {
            if query.at_limit(entries.len()) {
                break;
            }
            entries.push(Entry::new(column.clone(), value.clone()));
        }
        Ok(entries)
    }

    fn mutate(
        &self,
        key: &StaticBuffer,
        mutation: Mutation,
        _tx: &StoreTransaction,
    ) -> StorageResult<()> {
        let mut rows = self.rows.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        let row = rows.entry(key.clone()).or_default();
        for entry in mutation.additions() {
            row.insert(entry.column().clone(), entry.value().clone());
        }
        for column in mutation.deletions() {
            row.remove(column);
        }
        // A row with zero live columns must be indistinguishable from a key
        // that was never written.
        if row.is_empty() {
            rows.remove(key);
        }
        Ok(())
    }

    fn get_keys(&self, _tx: &StoreTransaction) -> StorageResult<KeyIterator> {
        if !self.features.supports_scan() {
            return Err(StorageError::unsupported("key scan"));
        }
        let rows = self.rows.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        let keys =
            rows.iter().filter(|(_, row)| !row.is_empty()).map(|(key, _)| key.clone()).collect();
        Ok(KeyIterator::new(keys))
    }

    fn close(&self) -> StorageResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (MemoryStoreManager, MemoryStore, StoreTransaction) {
        let manager = MemoryStoreManager::new();
        let store = manager.open_database("test").unwrap();
        let tx = manager.begin_transaction(ConsistencyLevel::Default).unwrap();
        (manager, store, tx)
    }

    #[test]
    fn open_database_is_idempotent() {
        let (manager, store, tx) = setup();
        store.mutate(&StaticBuffer::new(b"k"), Mutation::new().add(b"c", b"v"), &tx).unwrap();

        let alias = manager.open_database("test").unwrap();
        let value = alias.get(&StaticBuffer::new(b"k"), &StaticBuffer::new(b"c"), &tx).unwrap();
        assert_eq!(value, Some(StaticBuffer::new(b"v")));
    }

    #[test]
    fn distinct_names_are_distinct_row_spaces() {
        let (manager, store, tx) = setup();
        store.mutate(&StaticBuffer::new(b"k"), Mutation::new().add(b"c", b"v"), &tx).unwrap();

        let other = manager.open_database("other").unwrap();
        assert!(!other.contains_key(&StaticBuffer::new(b"k"), &tx).unwrap());
    }

    #[test]
    fn clear_storage_wipes_open_handles() {
        let (manager, store, tx) = setup();
        store.mutate(&StaticBuffer::new(b"k"), Mutation::new().add(b"c", b"v"), &tx).unwrap();

        manager.clear_storage().unwrap();
        assert!(!store.contains_key(&StaticBuffer::new(b"k"), &tx).unwrap());
    }

    #[test]
    fn scan_refused_when_not_declared() {
        let manager = MemoryStoreManager::with_features(StoreFeatures::new().ordered(true));
        let store = manager.open_database("test").unwrap();
        let tx = manager.begin_transaction(ConsistencyLevel::Default).unwrap();
        assert!(store.get_keys(&tx).unwrap_err().is_unsupported());
    }

    #[test]
    fn empty_store_name_is_rejected() {
        let manager = MemoryStoreManager::new();
        assert!(matches!(manager.open_database(""), Err(StorageError::InvalidName(_))));
    }
}
