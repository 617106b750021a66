//! Storage backend implementations.
//!
//! Each backend is a distinct variant type implementing the capability-set
//! traits in [`kcv`](crate::kcv); callers select one statically at startup.
//!
//! # Available Backends
//!
//! - [`memory`] - `BTreeMap`-based reference backend, no persistence
//! - [`redb`] - Pure-Rust embedded database, persistent and transactional

pub mod memory;
pub mod redb;

pub use memory::{MemoryStore, MemoryStoreManager};
pub use self::redb::{RedbStore, RedbStoreManager};
