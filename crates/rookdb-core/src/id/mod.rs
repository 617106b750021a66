//! Partitioned, type-tagged element ID allocation.
//!
//! Every graph element receives a 64-bit identifier at creation time and
//! keeps it for life. Identifiers are minted without coordination between
//! processes: each allocator owns a disjoint partition of the ID space and a
//! local monotonic counter, and the element kind is embedded in the low bits
//! so it can always be recovered from the identifier alone.
//!
//! # Bit layout
//!
//! From high to low (the sign bit of an `i64` reading stays clear, so every
//! minted ID is positive):
//!
//! ```text
//! [0][partition: p bits][counter: 61 - p bits][kind tag: 2 bits]
//! ```
//!
//! Placing the partition in the high bits gives disjoint allocators disjoint
//! output ranges; placing the counter above the tag makes IDs strictly
//! increasing in the counter for a fixed partition and kind.

mod error;
mod manager;

pub use error::IdError;
pub use manager::IdManager;

use serde::{Deserialize, Serialize};

/// Number of low bits holding the element kind tag.
pub const KIND_TAG_BITS: u32 = 2;

/// Total usable bits below the sign bit.
pub(crate) const USABLE_BITS: u32 = 63;

/// The kind of graph element an identifier denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// A vertex.
    Node,
    /// A relation between vertices.
    Edge,
    /// A property-key type definition.
    PropertyKey,
    /// A relationship-label type definition.
    RelationshipLabel,
}

impl ElementKind {
    /// All kinds, in tag order.
    pub const ALL: [Self; 4] = [Self::Node, Self::Edge, Self::PropertyKey, Self::RelationshipLabel];

    /// The 2-bit tag embedded in minted identifiers.
    #[must_use]
    pub const fn tag(self) -> u64 {
        match self {
            Self::Node => 0,
            Self::Edge => 1,
            Self::PropertyKey => 2,
            Self::RelationshipLabel => 3,
        }
    }

    /// Recover a kind from its 2-bit tag.
    ///
    /// Only the low [`KIND_TAG_BITS`] bits are inspected, so this is total.
    #[must_use]
    pub const fn from_tag(tag: u64) -> Self {
        match tag & 0b11 {
            0 => Self::Node,
            1 => Self::Edge,
            2 => Self::PropertyKey,
            _ => Self::RelationshipLabel,
        }
    }
}

/// A minted element identifier.
///
/// Always positive and always carries a decodable [`ElementKind`] tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw 64-bit value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Decode the element kind this identifier was minted for.
    #[must_use]
    pub const fn kind(self) -> ElementKind {
        ElementKind::from_tag(self.0)
    }
}

impl From<ElementId> for u64 {
    fn from(id: ElementId) -> Self {
        id.as_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip_for_all_kinds() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_tag(kind.tag()), kind);
        }
    }

    #[test]
    fn kind_reads_low_bits_only() {
        let id = ElementId::new((42 << KIND_TAG_BITS) | ElementKind::PropertyKey.tag());
        assert_eq!(id.kind(), ElementKind::PropertyKey);
    }

    #[test]
    fn ids_order_by_raw_value() {
        assert!(ElementId::new(4) < ElementId::new(8));
    }
}
