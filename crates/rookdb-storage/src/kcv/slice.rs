//! Slice queries: half-open column ranges with limit truncation.

use rookdb_core::types::{Entry, StaticBuffer};

/// A range-with-limit query over one key's columns.
///
/// Selects all live entries whose column lies in `[start, end)` - start
/// inclusive, end strictly exclusive - in ascending bytewise column order.
/// With a limit, the result is the lexicographically smallest `limit`
/// columns in range: identical to the unlimited result truncated, including
/// when the limit exceeds the match count (all matches, no padding, no
/// error).
///
/// # Example
///
/// ```
/// use rookdb_storage::kcv::{SliceQuery, StaticBuffer};
///
/// let query = SliceQuery::new(StaticBuffer::from_u64(0), StaticBuffer::from_u64(100))
///     .with_limit(10);
/// assert!(query.contains(StaticBuffer::from_u64(0).as_slice()));
/// assert!(!query.contains(StaticBuffer::from_u64(100).as_slice()));
/// ```
#[derive(Debug, Clone)]
pub struct SliceQuery {
    start: StaticBuffer,
    end: StaticBuffer,
    limit: Option<usize>,
}

impl SliceQuery {
    /// Create an unlimited query over `[start, end)`.
    #[must_use]
    pub fn new(start: impl Into<StaticBuffer>, end: impl Into<StaticBuffer>) -> Self {
        Self { start: start.into(), end: end.into(), limit: None }
    }

    /// Bound the result to the first `limit` entries.
    ///
    /// A limit of zero means unlimited.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 { None } else { Some(limit) };
        self
    }

    /// The inclusive start column.
    #[must_use]
    pub fn start(&self) -> &StaticBuffer {
        &self.start
    }

    /// The exclusive end column.
    #[must_use]
    pub fn end(&self) -> &StaticBuffer {
        &self.end
    }

    /// The maximum number of entries to return, if bounded.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns `true` if the range selects nothing (`start >= end`).
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `column` lies within `[start, end)`.
    #[must_use]
    pub fn contains(&self, column: &[u8]) -> bool {
        self.start.as_slice() <= column && column < self.end.as_slice()
    }

    /// Returns `true` if a result of `count` entries has reached the limit.
    #[must_use]
    pub fn at_limit(&self, count: usize) -> bool {
        self.limit.is_some_and(|limit| count >= limit)
    }

    /// Truncate a sorted result to the limit, if one is set.
    pub fn truncate(&self, entries: &mut Vec<Entry>) {
        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(column: u64) -> Entry {
        Entry::new(StaticBuffer::from_u64(column), StaticBuffer::from_u64(column))
    }

    #[test]
    fn start_is_inclusive_end_is_exclusive() {
        let query = SliceQuery::new(StaticBuffer::from_u64(777), StaticBuffer::from_u64(778));
        assert!(query.contains(StaticBuffer::from_u64(777).as_slice()));
        assert!(!query.contains(StaticBuffer::from_u64(778).as_slice()));
        assert!(!query.contains(StaticBuffer::from_u64(776).as_slice()));
    }

    #[test]
    fn zero_limit_means_unlimited() {
        let query = SliceQuery::new(b"a", b"z").with_limit(0);
        assert_eq!(query.limit(), None);
        assert!(!query.at_limit(usize::MAX));
    }

    #[test]
    fn truncation_keeps_the_smallest_columns() {
        let query = SliceQuery::new(StaticBuffer::from_u64(0), StaticBuffer::from_u64(10))
            .with_limit(2);
        let mut entries = vec![entry(1), entry(2), entry(3)];
        query.truncate(&mut entries);
        assert_eq!(entries, vec![entry(1), entry(2)]);
    }

    #[test]
    fn limit_beyond_matches_returns_all() {
        let query = SliceQuery::new(StaticBuffer::from_u64(0), StaticBuffer::from_u64(10))
            .with_limit(100);
        let mut entries = vec![entry(1), entry(2)];
        query.truncate(&mut entries);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn equal_bounds_are_vacuous() {
        let query = SliceQuery::new(b"m", b"m");
        assert!(query.is_vacuous());
        let inverted = SliceQuery::new(b"z", b"a");
        assert!(inverted.is_vacuous());
    }
}
