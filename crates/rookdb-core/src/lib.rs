//! `RookDB` Core
//!
//! This crate provides the fundamental types shared by every `RookDB`
//! storage backend.
//!
//! # Modules
//!
//! - [`types`] - Byte buffers, entries, and key-column identities
//! - [`id`] - Partitioned, type-tagged element ID allocation
//! - [`transaction`] - The graph transaction contract and its minimal
//!   non-persistent reference implementation

pub mod id;
pub mod transaction;
pub mod types;

// Re-export commonly used types
pub use id::{ElementId, ElementKind, IdError, IdManager};
pub use transaction::{EphemeralTransaction, MutationLog, TransactionError, TransactionResult};
pub use types::{Entry, KeyColumn, StaticBuffer};
