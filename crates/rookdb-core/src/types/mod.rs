//! Core data types for the key-column-value model.
//!
//! - [`StaticBuffer`] - Immutable, bytewise-ordered binary blob
//! - [`Entry`] - A column paired with its value
//! - [`KeyColumn`] - The logical identity of one (key, column) cell

mod buffer;
mod entry;

pub use buffer::StaticBuffer;
pub use entry::{Entry, KeyColumn};
