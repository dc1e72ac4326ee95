//! Search matching and sort ordering over memory records.

use crate::model::MemoryRecord;

/// View-time ordering for a record listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Descending creation id (latest record first).
    NewestFirst,
    /// Ascending creation id.
    OldestFirst,
}

impl Default for SortOrder {
    /// Listings default to newest-first.
    fn default() -> Self {
        Self::NewestFirst
    }
}

/// Whether a record's text matches a search query.
///
/// Matching is case-insensitive substring; an empty query matches
/// everything.
pub fn matches_query(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Sort records in place by creation id.
///
/// Ids are creation timestamps, so this is chronological order; ties are
/// left in their existing relative order.
pub fn sort_records(records: &mut [MemoryRecord], order: SortOrder) {
    match order {
        SortOrder::NewestFirst => records.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::OldestFirst => records.sort_by(|a, b| a.id.cmp(&b.id)),
    }
}
