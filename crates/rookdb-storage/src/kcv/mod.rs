//! The key-column-value store contract.
//!
//! This module defines everything a backend must implement:
//!
//! - [`KeyColumnValueStore`] - One named ordered `key -> (column -> value)` map
//! - [`StoreManager`] - Factory and lifecycle owner for named stores
//! - [`StoreTransaction`] - The handle scoping operations to one consistency level
//! - [`StoreFeatures`] - Capability flags callers consult before gated operations
//! - [`SliceQuery`] - Half-open column ranges with deterministic limit truncation
//! - [`Mutation`] - Batched additions and deletions for one key
//!
//! # Error Handling
//!
//! All operations return [`StorageResult<T>`]. Absence of a key or column is
//! `Ok(None)` / `Ok(false)`, never an error; unsupported capabilities fail
//! loudly with [`StorageError::Unsupported`].

mod error;
mod features;
mod mutation;
mod slice;
mod traits;
mod transaction;

pub use error::{StorageError, StorageResult};
pub use features::StoreFeatures;
pub use mutation::Mutation;
pub use slice::SliceQuery;
pub use traits::{KeyColumnValueStore, KeyIterator, StoreManager};
pub use transaction::{ConsistencyLevel, StoreTransaction};

// The buffer and entry model lives in rookdb-core; re-exported here because
// every store operation traffics in these types.
pub use rookdb_core::types::{Entry, KeyColumn, StaticBuffer};
