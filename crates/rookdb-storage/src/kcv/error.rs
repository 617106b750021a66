//! Storage error types.

use thiserror::Error;

/// Errors that can occur in key-column-value store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be opened.
    #[error("failed to open storage backend: {0}")]
    Open(String),

    /// A store name was rejected by the backend.
    #[error("invalid store name: {0}")]
    InvalidName(String),

    /// The backend does not support the invoked capability.
    ///
    /// Raised when a caller ignores the [`StoreFeatures`] declaration, e.g.
    /// scanning a backend without scan support or aborting a transaction on
    /// a backend whose mutations are irrevocable. Never degraded to a
    /// silent no-op.
    ///
    /// [`StoreFeatures`]: super::StoreFeatures
    #[error("operation not supported by this backend: {operation}")]
    Unsupported {
        /// The operation that was refused.
        operation: String,
    },

    /// The backend failed during an operation (disk, network, timeout).
    ///
    /// Propagated as-is; the contract never retries automatically.
    #[error("backend error: {0}")]
    Backend(String),

    /// A transaction could not be started, committed, or rolled back.
    #[error("transaction error: {0}")]
    Transaction(String),

    /// Stored bytes could not be interpreted.
    #[error("data corruption: {0}")]
    Corruption(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Shorthand for an [`StorageError::Unsupported`] failure.
    #[must_use]
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported { operation: operation.into() }
    }

    /// Returns `true` if this is an unsupported-capability failure.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Returns `true` if the failure came from the backend itself rather
    /// than from misuse of the contract.
    #[must_use]
    pub const fn is_backend_failure(&self) -> bool {
        matches!(self, Self::Backend(_) | Self::Io(_) | Self::Transaction(_))
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_is_classified() {
        let err = StorageError::unsupported("key scan");
        assert!(err.is_unsupported());
        assert!(!err.is_backend_failure());
        assert!(err.to_string().contains("key scan"));
    }

    #[test]
    fn backend_failures_are_classified() {
        assert!(StorageError::Backend("disk full".into()).is_backend_failure());
        assert!(StorageError::Transaction("commit failed".into()).is_backend_failure());
        assert!(!StorageError::InvalidName("a\\0b".into()).is_backend_failure());
    }
}
