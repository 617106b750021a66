//! Immutable byte buffers.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An immutable, cheaply cloneable sequence of bytes.
///
/// Keys, columns, and values in a key-column-value store are all
/// `StaticBuffer`s. Ordering is lexicographic over unsigned bytes, which is
/// the comparator every backend must reproduce for range queries. Equal byte
/// sequences compare equal regardless of how they were constructed.
///
/// Cloning shares the underlying allocation, so buffers can be passed
/// around freely without copying.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StaticBuffer(Arc<[u8]>);

impl StaticBuffer {
    /// Create a buffer from a byte slice.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self(Arc::from(bytes))
    }

    /// Create a buffer holding a `u64` in big-endian byte order.
    ///
    /// Big-endian encoding makes the numeric order of the values agree with
    /// the bytewise order of the buffers, so numeric columns slice correctly.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self(Arc::from(value.to_be_bytes().as_slice()))
    }

    /// Interpret the buffer as a big-endian `u64`.
    ///
    /// Returns `None` if the buffer is not exactly eight bytes.
    #[must_use]
    pub fn try_to_u64(&self) -> Option<u64> {
        let bytes: [u8; 8] = self.0.as_ref().try_into().ok()?;
        Some(u64::from_be_bytes(bytes))
    }

    /// View the buffer contents as a byte slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// The number of bytes in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for StaticBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Arc::from(bytes))
    }
}

impl From<&[u8]> for StaticBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for StaticBuffer {
    fn from(bytes: &[u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl Deref for StaticBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for StaticBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for StaticBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
