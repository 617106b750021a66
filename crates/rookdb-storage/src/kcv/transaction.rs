//! Store transaction handles and consistency levels.

use super::{StorageError, StorageResult};

/// The consistency policy governing one transaction's operations.
///
/// Interpreted by the backend; embedded single-node backends treat all
/// levels identically, while distributed backends may map them onto their
/// native read/write guarantees. Every backend accepts
/// [`ConsistencyLevel::Default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConsistencyLevel {
    /// The backend's default guarantees.
    #[default]
    Default,
    /// Strongest guarantees the backend offers.
    Strong,
    /// Weakest guarantees the backend offers, for throughput.
    Eventual,
}

/// A handle scoping a sequence of store operations to one consistency level.
///
/// Obtained from [`StoreManager::begin_transaction`] and passed to every
/// store operation. The handle is single-owner: one caller issues operations
/// against it sequentially, while the store itself tolerates many
/// transactions concurrently.
///
/// Termination is by value: [`StoreTransaction::commit`] and
/// [`StoreTransaction::abort`] consume the handle, so issuing an operation
/// against a terminated transaction is a compile-time error rather than a
/// runtime one.
///
/// The handle itself buffers nothing; backends apply each operation as it is
/// issued. A backend whose transactions can discard issued operations must
/// carry that state itself, paired with `supports_abort` in its
/// [`StoreFeatures`] declaration.
///
/// [`StoreManager::begin_transaction`]: super::StoreManager::begin_transaction
/// [`StoreFeatures`]: super::StoreFeatures
#[derive(Debug)]
pub struct StoreTransaction {
    level: ConsistencyLevel,
}

impl StoreTransaction {
    /// Create a handle at the given consistency level.
    ///
    /// Backends call this from `begin_transaction`; callers obtain handles
    /// from their manager.
    #[must_use]
    pub const fn new(level: ConsistencyLevel) -> Self {
        Self { level }
    }

    /// The consistency level governing operations issued through this handle.
    #[must_use]
    pub const fn consistency(&self) -> ConsistencyLevel {
        self.level
    }

    /// Commit the transaction, finalizing all operations issued under it.
    ///
    /// For backends that apply mutations irrevocably per operation this is
    /// a successful no-op; buffering backends flush here.
    #[allow(clippy::unnecessary_wraps)]
    pub fn commit(self) -> StorageResult<()> {
        Ok(())
    }

    /// Abort the transaction.
    ///
    /// # Errors
    ///
    /// Always fails with [`StorageError::Unsupported`]: this handle buffers
    /// nothing, so operations already issued through it are irrevocable.
    /// Reporting success here would leave those mutations live behind a
    /// "discarded" transaction, and the contract surfaces that instead of
    /// pretending.
    pub fn abort(self) -> StorageResult<()> {
        Err(StorageError::unsupported("transaction abort"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_consumes_the_handle() {
        let tx = StoreTransaction::new(ConsistencyLevel::Default);
        assert!(tx.commit().is_ok());
    }

    #[test]
    fn abort_is_always_refused() {
        let tx = StoreTransaction::new(ConsistencyLevel::Default);
        assert!(tx.abort().unwrap_err().is_unsupported());
    }

    #[test]
    fn consistency_level_is_carried() {
        let tx = StoreTransaction::new(ConsistencyLevel::Strong);
        assert_eq!(tx.consistency(), ConsistencyLevel::Strong);
    }
}
