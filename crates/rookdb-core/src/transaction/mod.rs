//! The graph transaction contract and its minimal reference implementation.
//!
//! A graph-level transaction mints identifiers for new elements, records
//! element lifecycle events (added, deleted, loaded) in a mutation log, and
//! terminates exactly once through `commit` or `abort`. Persistent
//! implementations flush the accumulated log to a key-column-value store on
//! commit; the [`EphemeralTransaction`] here holds no store at all and exists
//! to show that the contract is meaningful without one.

mod error;

pub use error::{TransactionError, TransactionResult};

use std::sync::Arc;

use crate::id::{ElementId, ElementKind, IdManager};
use crate::types::{Entry, StaticBuffer};

/// Accumulated element lifecycle events for one transaction.
///
/// The log is the explicit form of the add/delete/load hooks: every element
/// touched by the transaction is recorded here, and commit consumes the
/// whole log as one batch.
#[derive(Debug, Default, Clone)]
pub struct MutationLog {
    added: Vec<ElementId>,
    deleted: Vec<ElementId>,
    loaded: Vec<ElementId>,
}

impl MutationLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an element was created in this transaction.
    pub fn record_added(&mut self, id: ElementId) {
        self.added.push(id);
    }

    /// Record that an element was deleted in this transaction.
    pub fn record_deleted(&mut self, id: ElementId) {
        self.deleted.push(id);
    }

    /// Record that an element was loaded from storage into this transaction.
    pub fn record_loaded(&mut self, id: ElementId) {
        self.loaded.push(id);
    }

    /// Elements created in this transaction, in recording order.
    #[must_use]
    pub fn added(&self) -> &[ElementId] {
        &self.added
    }

    /// Elements deleted in this transaction, in recording order.
    #[must_use]
    pub fn deleted(&self) -> &[ElementId] {
        &self.deleted
    }

    /// Elements loaded in this transaction, in recording order.
    #[must_use]
    pub fn loaded(&self) -> &[ElementId] {
        &self.loaded
    }

    /// Returns `true` if no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty() && self.loaded.is_empty()
    }
}

/// A graph transaction with no backing store.
///
/// Identifier assignment still goes through the shared [`IdManager`]; the
/// transaction does not special-case minting. `commit` succeeds
/// unconditionally (there is nothing to conflict with) and yields the
/// accumulated [`MutationLog`] as one batch. `abort` is refused: with no
/// buffered storage state there is nothing to discard, and the design
/// surfaces that rather than silently succeeding.
///
/// Storage-retrieval capabilities (slice loading, index lookup, raw
/// neighborhood traversal) fail explicitly as unsupported since no row-space
/// exists behind this transaction.
#[derive(Debug)]
pub struct EphemeralTransaction {
    ids: Arc<IdManager>,
    log: MutationLog,
}

impl EphemeralTransaction {
    /// Start a transaction minting identifiers from the given manager.
    #[must_use]
    pub fn new(ids: Arc<IdManager>) -> Self {
        Self { ids, log: MutationLog::new() }
    }

    /// Mint an identifier for a new element of the given kind.
    pub fn assign_id(&self, kind: ElementKind) -> TransactionResult<ElementId> {
        Ok(self.ids.next_id(kind)?)
    }

    /// Record that an element was created.
    pub fn record_added(&mut self, id: ElementId) {
        self.log.record_added(id);
    }

    /// Record that an element was deleted.
    pub fn record_deleted(&mut self, id: ElementId) {
        self.log.record_deleted(id);
    }

    /// Record that an element was loaded.
    pub fn record_loaded(&mut self, id: ElementId) {
        self.log.record_loaded(id);
    }

    /// The events recorded so far.
    #[must_use]
    pub fn log(&self) -> &MutationLog {
        &self.log
    }

    /// Commit the transaction, consuming it.
    ///
    /// Success is unconditional; the accumulated log is returned as one
    /// batch for the caller to apply or discard.
    #[allow(clippy::unnecessary_wraps)]
    pub fn commit(self) -> TransactionResult<MutationLog> {
        Ok(self.log)
    }

    /// Abort the transaction.
    ///
    /// # Errors
    ///
    /// Always fails with [`TransactionError::Unsupported`]: nothing was
    /// buffered, so there is nothing to discard.
    pub fn abort(self) -> TransactionResult<()> {
        Err(TransactionError::unsupported("abort"))
    }

    /// Load the entry slice for a key.
    ///
    /// # Errors
    ///
    /// Always fails with [`TransactionError::Unsupported`]; this transaction
    /// holds no persisted row-space.
    pub fn load_slice(&self, _key: &StaticBuffer) -> TransactionResult<Vec<Entry>> {
        Err(TransactionError::unsupported("slice loading"))
    }

    /// Look up elements through a property index.
    ///
    /// # Errors
    ///
    /// Always fails with [`TransactionError::Unsupported`].
    pub fn index_lookup(&self, _property: &StaticBuffer) -> TransactionResult<Vec<ElementId>> {
        Err(TransactionError::unsupported("index retrieval"))
    }

    /// Retrieve the raw neighborhood of a vertex.
    ///
    /// # Errors
    ///
    /// Always fails with [`TransactionError::Unsupported`].
    pub fn raw_neighborhood(&self, _vertex: ElementId) -> TransactionResult<Vec<ElementId>> {
        Err(TransactionError::unsupported("raw neighborhood retrieval"))
    }
}
