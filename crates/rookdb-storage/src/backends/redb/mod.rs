//! Redb storage backend.
//!
//! Persists every store of one manager in a single physical redb table,
//! using a key layout that keeps each logical key's columns contiguous and
//! bytewise-ordered so slice queries map directly onto redb range scans.

mod manager;
mod store;
mod tables;

pub use manager::{RedbManagerConfig, RedbStoreManager};
pub use store::RedbStore;
