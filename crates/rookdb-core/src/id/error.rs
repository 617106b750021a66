//! ID allocation error types.

use thiserror::Error;

/// Errors that can occur while minting identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The local counter has exhausted the bits allotted to it.
    ///
    /// Fatal for the partition: wrapping would reuse identifiers, so the
    /// allocator refuses instead.
    #[error("id sequence exhausted for partition {partition}: counter exceeded {max_count}")]
    SequenceExhausted {
        /// The partition whose counter overflowed.
        partition: u64,
        /// The largest counter value the layout can represent.
        max_count: u64,
    },

    /// The partition does not fit in the configured partition bit width.
    #[error("partition {partition} does not fit in {bits} partition bits")]
    PartitionOutOfRange {
        /// The rejected partition value.
        partition: u64,
        /// The configured partition bit width.
        bits: u32,
    },

    /// The partition bit width leaves no room for the counter.
    #[error("invalid partition bit width: {0}")]
    InvalidPartitionBits(u32),
}
