//! `RookDB` Storage
//!
//! This crate defines the ordered key-column-value (KCV) store contract that
//! every `RookDB` persistence backend must satisfy, together with the
//! reference backends.
//!
//! A KCV store is an ordered map per key: `key -> (column -> value)`, where
//! keys, columns, and values are opaque byte buffers compared bytewise.
//! Backends expose point lookups, existence checks, half-open range slices
//! with deterministic limit truncation, batched per-key mutation, and
//! (where supported) full key scans.
//!
//! # Modules
//!
//! - [`kcv`] - The store and manager traits, transactions, slice queries
//! - [`backends`] - Concrete backend implementations (memory, redb)

pub mod backends;
pub mod kcv;

pub use kcv::{
    ConsistencyLevel, Entry, KeyColumnValueStore, KeyIterator, Mutation, SliceQuery, StaticBuffer,
    StorageError, StorageResult, StoreFeatures, StoreManager, StoreTransaction,
};
