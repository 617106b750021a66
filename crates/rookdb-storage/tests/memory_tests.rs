//! Tests for the in-memory backend.
//!
//! Runs the standard store contract suite against the in-memory backend,
//! plus tests specific to its capability declarations.


use rookdb_storage::backends::MemoryStoreManager;
use rookdb_storage::kcv::{
    ConsistencyLevel, KeyColumnValueStore, Mutation, StaticBuffer, StoreFeatures, StoreManager,
};

use kcv_suite::{run_test_suite, TestHarness};

/// Test harness for the in-memory backend.
///
/// Clones of the manager share row-spaces, so reopening is modeled by
/// swapping in a clone of the current manager.
struct MemoryHarness {
    manager: MemoryStoreManager,
}

impl TestHarness for MemoryHarness {
    type Manager = MemoryStoreManager;

    fn create() -> Self {
        Self { manager: MemoryStoreManager::new() }
    }

    fn manager(&self) -> &Self::Manager {
        &self.manager
    }

    fn reopen(&mut self) {
        self.manager = self.manager.clone();
    }
}

/// Run the full contract suite against the in-memory backend.
#[test]
fn test_memory_compliance() {
    run_test_suite::<MemoryHarness>();
}

/// The default feature set declares scans and ordered keys but no abort.
#[test]
fn test_default_features() {
    let manager = MemoryStoreManager::new();
    let features = manager.features();
    assert!(features.supports_scan());
    assert!(features.ordered_keys());
    assert!(!features.supports_abort());
    assert!(!features.local_key_partition());
}

/// Aborting fails loudly on a backend whose mutations apply immediately.
#[test]
fn test_abort_is_unsupported() {
    let manager = MemoryStoreManager::new();
    let tx = manager.begin_transaction(ConsistencyLevel::Default).expect("failed to begin");
    let err = tx.abort().expect_err("abort should be refused");
    assert!(err.is_unsupported());
}

/// Commit succeeds at every consistency level.
#[test]
fn test_commit_at_all_levels() {
    let manager = MemoryStoreManager::new();
    for level in [ConsistencyLevel::Default, ConsistencyLevel::Strong, ConsistencyLevel::Eventual] {
        let tx = manager.begin_transaction(level).expect("failed to begin");
        assert_eq!(tx.consistency(), level);
        tx.commit().expect("commit should succeed");
    }
}

/// Abort never reports success while leaving issued mutations live, even
/// when a manager overstates its capabilities.
#[test]
fn test_abort_never_pretends_to_discard() {
    let manager = MemoryStoreManager::with_features(
        StoreFeatures::new().scan(true).ordered(true).abortable(true),
    );
    let store = manager.open_database("cells").expect("failed to open store");
    let tx = manager.begin_transaction(ConsistencyLevel::Default).expect("failed to begin");

    let k = StaticBuffer::new(b"k");
    store.mutate(&k, Mutation::new().add(b"c", b"v"), &tx).expect("mutate failed");
    assert!(tx.abort().expect_err("abort must not report success").is_unsupported());

    // The mutation was applied irrevocably; the refusal is what tells the
    // caller nothing was discarded.
    let tx = manager.begin_transaction(ConsistencyLevel::Default).expect("failed to begin");
    assert_eq!(
        store.get(&k, &StaticBuffer::new(b"c"), &tx).expect("get failed"),
        Some(StaticBuffer::new(b"v"))
    );
}
