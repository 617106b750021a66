//! Store implementation over the shared redb table.

use std::sync::Arc;

use redb::{Database, TableError};

use rookdb_core::types::{Entry, StaticBuffer};

use crate::kcv::{
    KeyColumnValueStore, KeyIterator, Mutation, SliceQuery, StorageError, StorageResult,
    StoreFeatures, StoreTransaction,
};

use super::tables::{
    decode_cell, encode_cell, key_prefix, prefix_successor, store_end, store_start, DATA_TABLE,
};

/// A named store persisted in the redb backend.
pub struct RedbStore {
    db: Arc<Database>,
    name: String,
    features: StoreFeatures,
}

impl RedbStore {
    pub(super) fn new(db: Arc<Database>, name: String, features: StoreFeatures) -> Self {
        Self { db, name, features }
    }

    /// Run a read against the data table, treating a missing table as an
    /// empty store.
    fn read_table<T>(
        &self,
        default: T,
        f: impl FnOnce(redb::ReadOnlyTable<&'static [u8], &'static [u8]>) -> StorageResult<T>,
    ) -> StorageResult<T> {
        let tx = self.db.begin_read().map_err(|e| StorageError::Transaction(e.to_string()))?;
        match tx.open_table(DATA_TABLE) {
            Ok(table) => f(table),
            // Nothing was ever written through this manager.
            Err(TableError::TableDoesNotExist(_)) => Ok(default),
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }
}

impl KeyColumnValueStore for RedbStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains_key(&self, key: &StaticBuffer, _tx: &StoreTransaction) -> StorageResult<bool> {
        let prefix = key_prefix(&self.name, key);
        // Every cell of this key sorts in [prefix, successor); if the prefix
        // has no successor fall back to the end of the store's keyspace.
        let upper = prefix_successor(&prefix).unwrap_or_else(|| store_end(&self.name));
        self.read_table(false, |table| {
            let mut range = table
                .range(prefix.as_slice()..upper.as_slice())
                .map_err(|e| StorageError::Backend(e.to_string()))?;
            Ok(range.next().is_some())
        })
    }

    fn contains_key_column(
        &self,
        key: &StaticBuffer,
        column: &StaticBuffer,
        _tx: &StoreTransaction,
    ) -> StorageResult<bool> {
        let cell = encode_cell(&self.name, key, column);
        self.read_table(false, |table| {
            let found = table
                .get(cell.as_slice())
                .map_err(|e| StorageError::Backend(e.to_string()))?
                .is_some();
            Ok(found)
        })
    }

    fn get(
        &self,
        key: &StaticBuffer,
        column: &StaticBuffer,
        _tx: &StoreTransaction,
    ) -> StorageResult<Option<StaticBuffer>> {
        let cell = encode_cell(&self.name, key, column);
        self.read_table(None, |table| {
            let value = table
                .get(cell.as_slice())
                .map_err(|e| StorageError::Backend(e.to_string()))?
                .map(|guard| StaticBuffer::new(guard.value()));
            Ok(value)
        })
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
        let prefix = key_prefix(&self.name, key);
        let mut lower = prefix.clone();
        lower.extend_from_slice(query.start());
        let mut upper = prefix.clone();
        upper.extend_from_slice(query.end());

        self.read_table(Vec::new(), |table| {
            let range = table
                .range(lower.as_slice()..upper.as_slice())
                .map_err(|e| StorageError::Backend(e.to_string()))?;
            let mut entries = Vec::new();
            for cell in range {
                if query.at_limit(entries.len()) {
                    break;
                }
                let (physical, value) = cell.map_err(|e| StorageError::Backend(e.to_string()))?;
                let column = &physical.value()[prefix.len()..];
                entries.push(Entry::new(StaticBuffer::new(column), StaticBuffer::new(value.value())));
            }
            Ok(entries)
        })
    }

    fn mutate(
        &self,
        key: &StaticBuffer,
        mutation: Mutation,
        _tx: &StoreTransaction,
    ) -> StorageResult<()> {
        let tx = self.db.begin_write().map_err(|e| StorageError::Transaction(e.to_string()))?;
        {
            let mut table =
                tx.open_table(DATA_TABLE).map_err(|e| StorageError::Backend(e.to_string()))?;
            for entry in mutation.additions() {
                let cell = encode_cell(&self.name, key, entry.column());
                table
                    .insert(cell.as_slice(), entry.value().as_ref())
                    .map_err(|e| StorageError::Backend(e.to_string()))?;
            }
            for column in mutation.deletions() {
                let cell = encode_cell(&self.name, key, column);
                table
                    .remove(cell.as_slice())
                    .map_err(|e| StorageError::Backend(e.to_string()))?;
            }
        }
        tx.commit().map_err(|e| StorageError::Transaction(e.to_string()))?;
        Ok(())
    }

    fn get_keys(&self, _tx: &StoreTransaction) -> StorageResult<KeyIterator> {
        if !self.features.supports_scan() {
            return Err(StorageError::unsupported("key scan"));
        }
        let lower = store_start(&self.name);
        let upper = store_end(&self.name);
        self.read_table(KeyIterator::new(Vec::new()), |table| {
            let range = table
                .range(lower.as_slice()..upper.as_slice())
                .map_err(|e| StorageError::Backend(e.to_string()))?;
            let mut keys: Vec<StaticBuffer> = Vec::new();
            for cell in range {
                let (physical, _) = cell.map_err(|e| StorageError::Backend(e.to_string()))?;
                let Some((key, _)) = decode_cell(&self.name, physical.value()) else {
                    return Err(StorageError::Corruption(format!(
                        "undecodable physical key in store {:?}",
                        self.name
                    )));
                };
                // Cells of one key are contiguous, so consecutive dedup
                // yields each live key exactly once.
                if keys.last().map(StaticBuffer::as_slice) != Some(key) {
                    keys.push(StaticBuffer::new(key));
                }
            }
            Ok(KeyIterator::new(keys))
        })
    }

    fn close(&self) -> StorageResult<()> {
        Ok(())
    }
}
