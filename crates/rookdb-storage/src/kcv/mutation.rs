//! Batched per-key mutations.

use rookdb_core::types::{Entry, StaticBuffer};

/// A batch of additions and deletions applied to one key's row as a single
/// logical unit.
///
/// Either side may be empty, meaning "no-op" for that half. Additions are
/// applied before deletions, so a column named on both sides within one
/// batch ends up removed: deletion wins.
#[derive(Debug, Clone, Default)]
pub struct Mutation {
    additions: Vec<Entry>,
    deletions: Vec<StaticBuffer>,
}

impl Mutation {
    /// Create an empty mutation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mutation from prepared addition and deletion lists.
    #[must_use]
    pub fn from_parts(additions: Vec<Entry>, deletions: Vec<StaticBuffer>) -> Self {
        Self { additions, deletions }
    }

    /// Add or overwrite a column with a value.
    #[must_use]
    pub fn add(mut self, column: impl Into<StaticBuffer>, value: impl Into<StaticBuffer>) -> Self {
        self.additions.push(Entry::new(column, value));
        self
    }

    /// Remove a column.
    #[must_use]
    pub fn delete(mut self, column: impl Into<StaticBuffer>) -> Self {
        self.deletions.push(column.into());
        self
    }

    /// The entries to insert or overwrite.
    #[must_use]
    pub fn additions(&self) -> &[Entry] {
        &self.additions
    }

    /// The columns to remove.
    #[must_use]
    pub fn deletions(&self) -> &[StaticBuffer] {
        &self.deletions
    }

    /// Returns `true` if both halves are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_both_halves() {
        let mutation = Mutation::new().add(b"c1", b"v1").add(b"c2", b"v2").delete(b"c3");
        assert_eq!(mutation.additions().len(), 2);
        assert_eq!(mutation.deletions().len(), 1);
        assert!(!mutation.is_empty());
    }

    #[test]
    fn empty_mutation_is_a_no_op_marker() {
        assert!(Mutation::new().is_empty());
        assert!(Mutation::from_parts(Vec::new(), Vec::new()).is_empty());
    }
}
