//! Core store and manager traits.

use rookdb_core::types::{Entry, StaticBuffer};

use super::{ConsistencyLevel, Mutation, SliceQuery, StorageResult, StoreFeatures, StoreTransaction};

/// One named, backend-agnostic ordered `key -> (column -> value)` map.
///
/// All operations take a [`StoreTransaction`] scoping them to a consistency
/// level. Within one transaction, reads observe prior writes issued through
/// the same handle (read-your-writes); isolation across concurrent
/// transactions is governed by the backend and the requested level, not by
/// this contract.
///
/// Implementations must be thread-safe: multiple transactions, possibly from
/// different threads, may operate concurrently on overlapping keys.
pub trait KeyColumnValueStore: Send + Sync {
    /// The name this store was opened under.
    fn name(&self) -> &str;

    /// Returns `true` iff the row for `key` has at least one live entry.
    ///
    /// A row with zero live columns is indistinguishable from a key that
    /// was never written.
    fn contains_key(&self, key: &StaticBuffer, tx: &StoreTransaction) -> StorageResult<bool>;

    /// Returns `true` iff `(key, column)` currently maps to a live value.
    fn contains_key_column(
        &self,
        key: &StaticBuffer,
        column: &StaticBuffer,
        tx: &StoreTransaction,
    ) -> StorageResult<bool>;

    /// Point lookup of one cell.
    ///
    /// Absence is `Ok(None)`, distinct from an empty value.
    fn get(
        &self,
        key: &StaticBuffer,
        column: &StaticBuffer,
        tx: &StoreTransaction,
    ) -> StorageResult<Option<StaticBuffer>>;

    /// All live entries for `key` whose column lies in the query's
    /// `[start, end)` range, ascending by column bytes, truncated to the
    /// query limit if one is set.
    ///
    /// The result is indistinguishable between freshly-mutated and
    /// reloaded-after-commit state.
    fn get_slice(
        &self,
        key: &StaticBuffer,
        query: &SliceQuery,
        tx: &StoreTransaction,
    ) -> StorageResult<Vec<Entry>>;

    /// Apply a batch of additions and deletions to `key`'s row as one
    /// logical unit.
    ///
    /// Additions apply before deletions: a column named on both sides of
    /// the batch ends up removed.
    fn mutate(&self, key: &StaticBuffer, mutation: Mutation, tx: &StoreTransaction)
        -> StorageResult<()>;

    /// Enumerate every key with a non-empty row, each exactly once, in an
    /// implementation-defined order.
    ///
    /// Only valid when the manager's [`StoreFeatures::supports_scan`] is
    /// `true`; otherwise fails with [`StorageError::Unsupported`]. Each call
    /// returns an independently-advanced iterator, so concurrent scans over
    /// the same transaction view never corrupt each other.
    ///
    /// [`StorageError::Unsupported`]: super::StorageError::Unsupported
    fn get_keys(&self, tx: &StoreTransaction) -> StorageResult<KeyIterator>;

    /// Release backend resources held by this store handle. Idempotent.
    fn close(&self) -> StorageResult<()>;
}

/// Factory and lifecycle owner for the named stores of one backend.
pub trait StoreManager: Send + Sync {
    /// The store type this backend produces.
    type Store: KeyColumnValueStore;

    /// Open the store with the given name, creating it if necessary.
    ///
    /// Idempotent: repeated calls with the same name return handles onto
    /// the same underlying row-space.
    fn open_database(&self, name: &str) -> StorageResult<Self::Store>;

    /// Begin a transaction at the requested consistency level.
    ///
    /// Every backend accepts [`ConsistencyLevel::Default`].
    fn begin_transaction(&self, level: ConsistencyLevel) -> StorageResult<StoreTransaction>;

    /// The backend's capability descriptor.
    ///
    /// Stable for the lifetime of this manager instance.
    fn features(&self) -> StoreFeatures;

    /// Destroy all stores and their contents.
    ///
    /// Used for test isolation; callable before any store has been opened.
    fn clear_storage(&self) -> StorageResult<()>;

    /// Release the backend connection. All open stores become invalid.
    fn close(&self) -> StorageResult<()>;
}

/// An owned iterator over the keys of one store.
///
/// The key set is materialized when the scan is created, so any number of
/// `KeyIterator`s can be advanced concurrently without shared cursor state.
#[derive(Debug)]
pub struct KeyIterator {
    inner: std::vec::IntoIter<StaticBuffer>,
}

impl KeyIterator {
    /// Wrap a materialized key set.
    #[must_use]
    pub fn new(keys: Vec<StaticBuffer>) -> Self {
        Self { inner: keys.into_iter() }
    }

    /// Number of keys not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inner.len()
    }
}

impl Iterator for KeyIterator {
    type Item = StaticBuffer;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for KeyIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_iterator_yields_in_order() {
        let keys = vec![StaticBuffer::new(b"a"), StaticBuffer::new(b"b")];
        let mut iter = KeyIterator::new(keys);
        assert_eq!(iter.remaining(), 2);
        assert_eq!(iter.next(), Some(StaticBuffer::new(b"a")));
        assert_eq!(iter.next(), Some(StaticBuffer::new(b"b")));
        assert_eq!(iter.next(), None);
    }
}
