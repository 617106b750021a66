//! The ID manager: codec plus atomic allocator.

use std::sync::atomic::{AtomicU64, Ordering};

use super::{ElementId, ElementKind, IdError, KIND_TAG_BITS, USABLE_BITS};

/// Largest partition bit width the layout accepts.
///
/// At least 31 bits must remain for the counter so a single partition can
/// mint a useful number of identifiers.
pub const MAX_PARTITION_BITS: u32 = 30;

/// Mints globally unique, type-tagged 64-bit identifiers for one partition.
///
/// The manager is both a pure codec ([`IdManager::encode`] and the
/// decoding accessors) and an allocator: [`IdManager::next_id`] draws from
/// an owned atomic counter, so concurrent minting from multiple threads
/// observes every increment exactly once.
///
/// Two managers configured with the same bit width but different partitions
/// produce disjoint identifier ranges for all counter values.
///
/// # Example
///
/// ```
/// use rookdb_core::id::{ElementKind, IdManager};
///
/// let ids = IdManager::new(4, 1)?;
/// let a = ids.next_id(ElementKind::Node)?;
/// let b = ids.next_id(ElementKind::Node)?;
/// assert!(a < b);
/// assert_eq!(a.kind(), ElementKind::Node);
/// # Ok::<(), rookdb_core::id::IdError>(())
/// ```
#[derive(Debug)]
pub struct IdManager {
    partition: u64,
    partition_bits: u32,
    counter: AtomicU64,
}

impl IdManager {
    /// Create a manager for the given partition, starting the counter at 1.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidPartitionBits`] if `partition_bits` exceeds
    /// [`MAX_PARTITION_BITS`], and [`IdError::PartitionOutOfRange`] if
    /// `partition` does not fit in that width.
    pub fn new(partition_bits: u32, partition: u64) -> Result<Self, IdError> {
        Self::with_start(partition_bits, partition, 1)
    }

    /// Create a manager whose first minted counter value is `start`.
    ///
    /// Use this to resume allocation after a restart; `start` must be one
    /// greater than the highest counter value already consumed by this
    /// partition.
    pub fn with_start(partition_bits: u32, partition: u64, start: u64) -> Result<Self, IdError> {
        if partition_bits > MAX_PARTITION_BITS {
            return Err(IdError::InvalidPartitionBits(partition_bits));
        }
        if partition >= 1 << partition_bits {
            return Err(IdError::PartitionOutOfRange { partition, bits: partition_bits });
        }
        Ok(Self { partition, partition_bits, counter: AtomicU64::new(start.max(1)) })
    }

    /// The partition this manager allocates from.
    #[must_use]
    pub const fn partition(&self) -> u64 {
        self.partition
    }

    /// Number of bits available to the local counter.
    #[must_use]
    pub const fn count_bits(&self) -> u32 {
        USABLE_BITS - KIND_TAG_BITS - self.partition_bits
    }

    /// Largest counter value the layout can represent.
    #[must_use]
    pub const fn max_count(&self) -> u64 {
        (1 << self.count_bits()) - 1
    }

    /// Encode a (partition, kind, counter) triple into an identifier.
    ///
    /// Pure: does not touch the allocator state. Counter values start at 1
    /// so that every minted identifier is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::SequenceExhausted`] if `count` is zero or exceeds
    /// [`IdManager::max_count`]; the counter must never wrap into collision.
    pub fn encode(&self, kind: ElementKind, count: u64) -> Result<ElementId, IdError> {
        if count == 0 || count > self.max_count() {
            return Err(IdError::SequenceExhausted {
                partition: self.partition,
                max_count: self.max_count(),
            });
        }
        let raw = (self.partition << (self.count_bits() + KIND_TAG_BITS))
            | (count << KIND_TAG_BITS)
            | kind.tag();
        Ok(ElementId::new(raw))
    }

    /// Mint the next identifier for an element of the given kind.
    ///
    /// Safe to call concurrently; each call consumes exactly one counter
    /// value, so no two calls ever return the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::SequenceExhausted`] once the counter has consumed
    /// its full bit allotment. The counter is not rewound, so every
    /// subsequent call fails the same way rather than risking a collision.
    pub fn next_id(&self, kind: ElementKind) -> Result<ElementId, IdError> {
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        self.encode(kind, count)
    }

    /// Decode the partition component of an identifier minted by a manager
    /// with this bit width.
    #[must_use]
    pub const fn partition_of(&self, id: ElementId) -> u64 {
        id.as_u64() >> (self.count_bits() + KIND_TAG_BITS)
    }

    /// Decode the counter component of an identifier minted by a manager
    /// with this bit width.
    #[must_use]
    pub const fn count_of(&self, id: ElementId) -> u64 {
        (id.as_u64() >> KIND_TAG_BITS) & ((1 << self.count_bits()) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrips_through_encoding() {
        let ids = IdManager::new(8, 3).unwrap();
        for kind in ElementKind::ALL {
            let id = ids.encode(kind, 99).unwrap();
            assert_eq!(id.kind(), kind);
        }
    }

    #[test]
    fn components_decode() {
        let ids = IdManager::new(8, 3).unwrap();
        let id = ids.encode(ElementKind::Edge, 1234).unwrap();
        assert_eq!(ids.partition_of(id), 3);
        assert_eq!(ids.count_of(id), 1234);
    }

    #[test]
    fn minted_ids_are_positive_and_monotonic() {
        let ids = IdManager::new(4, 0).unwrap();
        let mut prev = 0;
        for _ in 0..1000 {
            let id = ids.next_id(ElementKind::Node).unwrap().as_u64();
            assert!(id > 0);
            assert!(id < 1 << 63);
            assert!(id > prev);
            prev = id;
        }
    }

    #[test]
    fn disjoint_partitions_never_collide() {
        let left = IdManager::new(4, 1).unwrap();
        let right = IdManager::new(4, 2).unwrap();
        // Partition occupies the high bits, so the entire output range of
        // partition 1 sits below that of partition 2.
        let left_max = left.encode(ElementKind::RelationshipLabel, left.max_count()).unwrap();
        let right_min = right.encode(ElementKind::Node, 1).unwrap();
        assert!(left_max < right_min);
    }

    #[test]
    fn exhaustion_fails_instead_of_wrapping() {
        let ids = IdManager::with_start(30, 5, u64::MAX >> 32).unwrap();
        // Counter bits: 63 - 2 - 30 = 31, so this start is already past the end.
        let err = ids.next_id(ElementKind::Node).unwrap_err();
        assert!(matches!(err, IdError::SequenceExhausted { partition: 5, .. }));
        // And it stays failed; the counter never wraps back into range.
        assert!(ids.next_id(ElementKind::Node).is_err());
    }

    #[test]
    fn zero_count_is_rejected() {
        let ids = IdManager::new(0, 0).unwrap();
        assert!(ids.encode(ElementKind::Node, 0).is_err());
    }

    #[test]
    fn partition_must_fit_width() {
        assert!(matches!(
            IdManager::new(2, 4),
            Err(IdError::PartitionOutOfRange { partition: 4, bits: 2 })
        ));
        assert!(matches!(IdManager::new(40, 0), Err(IdError::InvalidPartitionBits(40))));
    }

    #[test]
    fn concurrent_minting_produces_unique_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let ids = Arc::new(IdManager::new(4, 7).unwrap());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let ids = Arc::clone(&ids);
            handles.push(std::thread::spawn(move || {
                (0..500).map(|_| ids.next_id(ElementKind::Edge).unwrap()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id minted: {id:?}");
            }
        }
        assert_eq!(seen.len(), 8 * 500);
    }
}
