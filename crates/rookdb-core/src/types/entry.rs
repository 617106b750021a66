//! Column-value entries and cell identities.

use super::StaticBuffer;

/// A column paired with its value inside one key's row.
///
/// Columns are unique within a row; inserting the same column twice
/// overwrites the prior value. Slice queries return entries sorted
/// ascending by column bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    column: StaticBuffer,
    value: StaticBuffer,
}

impl Entry {
    /// Create an entry from a column and a value.
    #[must_use]
    pub fn new(column: impl Into<StaticBuffer>, value: impl Into<StaticBuffer>) -> Self {
        Self { column: column.into(), value: value.into() }
    }

    /// The column this entry is stored under.
    #[must_use]
    pub fn column(&self) -> &StaticBuffer {
        &self.column
    }

    /// The stored value.
    #[must_use]
    pub fn value(&self) -> &StaticBuffer {
        &self.value
    }

    /// Split the entry into its column and value buffers.
    #[must_use]
    pub fn into_parts(self) -> (StaticBuffer, StaticBuffer) {
        (self.column, self.value)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    /// Entries order by column alone; values do not participate.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.column.cmp(&other.column)
    }
}

/// The logical identity of one (key, column) cell.
///
/// Not persisted; used to reason about presence and absence of individual
/// cells across mutation cycles. Every (key, column) pair maps to at most
/// one live value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyColumn {
    /// The row key.
    pub key: StaticBuffer,
    /// The column within the row.
    pub column: StaticBuffer,
}

impl KeyColumn {
    /// Create a cell identity from a key and a column.
    #[must_use]
    pub fn new(key: impl Into<StaticBuffer>, column: impl Into<StaticBuffer>) -> Self {
        Self { key: key.into(), column: column.into() }
    }
}
