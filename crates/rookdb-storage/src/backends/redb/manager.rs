//! Redb store manager.

use std::path::Path;
use std::sync::Arc;

use redb::Database;

use crate::kcv::{
    ConsistencyLevel, StorageError, StorageResult, StoreFeatures, StoreManager, StoreTransaction,
};

use super::store::RedbStore;
use super::tables::{DATA_TABLE, NAME_SEPARATOR};

/// Configuration options for the redb backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedbManagerConfig {
    /// Cache size in bytes. If unset, redb's default applies.
    pub cache_size: Option<usize>,
}

impl RedbManagerConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cache size.
    #[must_use]
    pub const fn cache_size(mut self, size: usize) -> Self {
        self.cache_size = Some(size);
        self
    }
}

/// Manager for the redb backend.
///
/// Owns the database connection; stores opened from this manager share it.
/// Mutations are committed by the backend per `mutate` call and are
/// therefore irrevocable, so the backend declares no abort support.
pub struct RedbStoreManager {
    db: Arc<Database>,
    features: StoreFeatures,
}

impl RedbStoreManager {
    /// Open or create a database file with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the file cannot be opened or created.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Self::open_with_config(path, RedbManagerConfig::default())
    }

    /// Open or create a database file with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the file cannot be opened or created.
    pub fn open_with_config(
        path: impl AsRef<Path>,
        config: RedbManagerConfig,
    ) -> StorageResult<Self> {
        let mut builder = Database::builder();
        if let Some(cache_size) = config.cache_size {
            builder.set_cache_size(cache_size);
        }
        let db = builder.create(path.as_ref()).map_err(|e| StorageError::Open(e.to_string()))?;
        tracing::debug!(path = %path.as_ref().display(), "opened redb backend");
        Ok(Self::from_database(db))
    }

    /// Create a database backed by process memory, for testing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the database cannot be created.
    pub fn in_memory() -> StorageResult<Self> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())
            .map_err(|e| StorageError::Open(e.to_string()))?;
        Ok(Self::from_database(db))
    }

    fn from_database(db: Database) -> Self {
        Self {
            db: Arc::new(db),
            features: StoreFeatures::new().scan(true).ordered(true),
        }
    }
}

impl StoreManager for RedbStoreManager {
    type Store = RedbStore;

    fn open_database(&self, name: &str) -> StorageResult<Self::Store> {
        if name.is_empty() {
            return Err(StorageError::InvalidName("store name must be non-empty".into()));
        }
        if name.as_bytes().contains(&NAME_SEPARATOR) {
            return Err(StorageError::InvalidName(format!(
                "store name {name:?} contains the reserved separator byte"
            )));
        }
        Ok(RedbStore::new(Arc::clone(&self.db), name.to_owned(), self.features))
    }

    fn begin_transaction(&self, level: ConsistencyLevel) -> StorageResult<StoreTransaction> {
        Ok(StoreTransaction::new(level))
    }

    fn features(&self) -> StoreFeatures {
        self.features
    }

    fn clear_storage(&self) -> StorageResult<()> {
        tracing::debug!("clearing redb storage");
        let tx = self.db.begin_write().map_err(|e| StorageError::Transaction(e.to_string()))?;
        // Deleting a table that was never created is not a failure.
        tx.delete_table(DATA_TABLE).map_err(|e| StorageError::Backend(e.to_string()))?;
        tx.commit().map_err(|e| StorageError::Transaction(e.to_string()))?;
        Ok(())
    }

    fn close(&self) -> StorageResult<()> {
        // The database closes when the last store handle drops its Arc.
        Ok(())
    }
}
