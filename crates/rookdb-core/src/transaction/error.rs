//! Transaction error types.

use thiserror::Error;

use crate::id::IdError;

/// Errors that can occur during graph transaction operations.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The transaction implementation does not support the operation.
    ///
    /// Surfaced instead of silently succeeding: a caller invoking `abort`
    /// or a storage-retrieval method on a backend without that capability
    /// must find out immediately.
    #[error("operation not supported by this transaction: {operation}")]
    Unsupported {
        /// The operation that was refused.
        operation: String,
    },

    /// Identifier minting failed.
    #[error("id allocation failed: {0}")]
    Id(#[from] IdError),

    /// The storage layer returned an error.
    #[error("storage error: {0}")]
    Storage(String),
}

impl TransactionError {
    /// Shorthand for an [`TransactionError::Unsupported`] failure.
    #[must_use]
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported { operation: operation.into() }
    }

    /// Returns `true` if this is an unsupported-capability failure.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Result type alias for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;
