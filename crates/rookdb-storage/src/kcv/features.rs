//! Backend capability descriptors.

/// Capability flags reported by a storage backend.
///
/// Callers must consult the features of a manager before invoking gated
/// operations; a backend invoked against a capability it does not declare
/// fails with [`StorageError::Unsupported`] rather than silently degrading.
///
/// The descriptor is stable for the lifetime of the manager that reported it.
///
/// [`StorageError::Unsupported`]: super::StorageError::Unsupported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreFeatures {
    supports_scan: bool,
    ordered_keys: bool,
    local_key_partition: bool,
    supports_abort: bool,
}

impl StoreFeatures {
    /// Create a descriptor with every capability disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            supports_scan: false,
            ordered_keys: false,
            local_key_partition: false,
            supports_abort: false,
        }
    }

    /// Declare whether the backend can enumerate all keys.
    #[must_use]
    pub const fn scan(mut self, supported: bool) -> Self {
        self.supports_scan = supported;
        self
    }

    /// Declare whether keys are maintained in sorted byte order
    /// (as opposed to hash-distributed).
    #[must_use]
    pub const fn ordered(mut self, ordered: bool) -> Self {
        self.ordered_keys = ordered;
        self
    }

    /// Declare whether the backend exposes local key partition information.
    #[must_use]
    pub const fn local_partition(mut self, aware: bool) -> Self {
        self.local_key_partition = aware;
        self
    }

    /// Declare whether transactions can be aborted.
    #[must_use]
    pub const fn abortable(mut self, supported: bool) -> Self {
        self.supports_abort = supported;
        self
    }

    /// `true` if the backend can enumerate all keys via
    /// [`KeyColumnValueStore::get_keys`].
    ///
    /// [`KeyColumnValueStore::get_keys`]: super::KeyColumnValueStore::get_keys
    #[must_use]
    pub const fn supports_scan(&self) -> bool {
        self.supports_scan
    }

    /// `true` if keys are maintained in sorted byte order.
    #[must_use]
    pub const fn ordered_keys(&self) -> bool {
        self.ordered_keys
    }

    /// `true` if the backend exposes local key partition information.
    #[must_use]
    pub const fn local_key_partition(&self) -> bool {
        self.local_key_partition
    }

    /// `true` if the backend can discard operations issued under a
    /// transaction.
    ///
    /// Neither shipped backend buffers, so both declare `false` and
    /// [`StoreTransaction::abort`] refuses unconditionally; a buffering
    /// backend must pair `true` with its own discardable transaction state.
    ///
    /// [`StoreTransaction::abort`]: super::StoreTransaction::abort
    #[must_use]
    pub const fn supports_abort(&self) -> bool {
        self.supports_abort
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_flags() {
        let features = StoreFeatures::new().scan(true).ordered(true);
        assert!(features.supports_scan());
        assert!(features.ordered_keys());
        assert!(!features.local_key_partition());
        assert!(!features.supports_abort());
    }

    #[test]
    fn default_declares_nothing() {
        let features = StoreFeatures::default();
        assert!(!features.supports_scan());
        assert!(!features.ordered_keys());
    }
}
