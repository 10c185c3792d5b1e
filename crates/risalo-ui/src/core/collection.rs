//! Fetch lifecycle for one paginated collection, kept free of DOM types so
//! the race rules are testable natively.
//!
//! Every fetch carries a sequence number. The collection remembers the
//! newest number it has seen begin; pages and errors from older fetches are
//! discarded on arrival, so a slow early response can never overwrite a
//! newer one.

use std::collections::BTreeSet;

use risalo_api_models::{
    CategorySummary, CoupletItem, HesudharEntry, Page, PoetRef, PoetTag, PoetrySummary,
    RomanWordEntry, TermEntry, TimelineEra,
};

/// Server-assigned row identifier.
pub type RowId = u64;

/// Rows that can be addressed individually for in-place updates.
pub trait Keyed {
    /// Stable identifier for this row.
    fn key(&self) -> RowId;
}

impl Keyed for CategorySummary {
    fn key(&self) -> RowId {
        self.id
    }
}

impl Keyed for PoetrySummary {
    fn key(&self) -> RowId {
        self.id
    }
}

impl Keyed for CoupletItem {
    fn key(&self) -> RowId {
        self.id
    }
}

impl Keyed for PoetRef {
    fn key(&self) -> RowId {
        self.id
    }
}

impl Keyed for PoetTag {
    fn key(&self) -> RowId {
        self.id
    }
}

impl Keyed for RomanWordEntry {
    fn key(&self) -> RowId {
        self.id
    }
}

impl Keyed for HesudharEntry {
    fn key(&self) -> RowId {
        self.id
    }
}

impl Keyed for TermEntry {
    fn key(&self) -> RowId {
        self.id
    }
}

impl Keyed for TimelineEra {
    fn key(&self) -> RowId {
        self.id
    }
}

/// One collection's rows plus fetch bookkeeping.
///
/// Stale rows stay on screen while a refresh is in flight and when a fetch
/// fails; only a landed page replaces them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection<T> {
    /// Rows from the most recent landed page.
    pub items: Vec<T>,
    /// Total rows across all pages, from the last landed page.
    pub total: u64,
    /// Total pages, from the last landed page. Never below 1.
    pub total_pages: u32,
    /// Whether the newest fetch is still in flight.
    pub loading: bool,
    /// Message from the newest fetch if it failed.
    pub error: Option<String>,
    latest_seq: u64,
    loaded: bool,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 1,
            loading: false,
            error: None,
            latest_seq: 0,
            loaded: false,
        }
    }
}

impl<T> Collection<T> {
    /// Marks a fetch with this sequence number as the one whose result
    /// counts. Previous rows stay visible underneath the loading state.
    pub fn begin(&mut self, seq: u64) {
        self.latest_seq = seq;
        self.loading = true;
        self.error = None;
    }

    /// Whether a fetch with this sequence number is still the newest.
    #[must_use]
    pub const fn is_current(&self, seq: u64) -> bool {
        self.latest_seq == seq
    }

    /// Applies a landed page. Returns `false` without touching anything
    /// when a newer fetch has begun since this one.
    pub fn apply_page(&mut self, seq: u64, page: Page<T>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.items = page.items;
        self.total = page.total;
        self.total_pages = page.total_pages.max(1);
        self.loading = false;
        self.error = None;
        self.loaded = true;
        true
    }

    /// Records a failed fetch. Existing rows are kept so the page does not
    /// blank out under the error banner. Stale failures are discarded.
    pub fn apply_error(&mut self, seq: u64, message: impl Into<String>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    /// Retires any in-flight fetch without touching rows or status, for
    /// unmount cleanup.
    pub fn invalidate(&mut self, seq: u64) {
        self.latest_seq = seq;
    }

    /// Whether any page has ever landed, failures aside.
    #[must_use]
    pub const fn has_loaded(&self) -> bool {
        self.loaded
    }
}

impl<T: Keyed> Collection<T> {
    /// Swaps one row for its server-confirmed replacement, matched by key.
    /// Returns `false` when the row is not on the current page.
    pub fn replace_row(&mut self, row: T) -> bool {
        let id = row.key();
        for slot in &mut self.items {
            if slot.key() == id {
                *slot = row;
                return true;
            }
        }
        false
    }

    /// Drops one row after a confirmed delete and decrements the total.
    /// Page counts are left for the next fetch to correct.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.items.len();
        self.items.retain(|row| row.key() != id);
        if self.items.len() == before {
            return false;
        }
        self.total = self.total.saturating_sub(1);
        true
    }
}

/// Row ids with a mutation in flight, used to disable their controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MutationSet(BTreeSet<RowId>);

impl MutationSet {
    /// Claims a row for a mutation. Returns `false` when one is already
    /// running, so double-clicks dispatch nothing.
    pub fn begin(&mut self, id: RowId) -> bool {
        self.0.insert(id)
    }

    /// Releases a row once its mutation settles, either way.
    pub fn finish(&mut self, id: RowId) {
        self.0.remove(&id);
    }

    /// Whether this row has a mutation in flight.
    #[must_use]
    pub fn contains(&self, id: RowId) -> bool {
        self.0.contains(&id)
    }

    /// Whether no mutations are in flight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: u64, slug: &str) -> CategorySummary {
        CategorySummary {
            id,
            slug: slug.to_string(),
            sindhi_name: String::new(),
            english_name: slug.to_string(),
            ..Default::default()
        }
    }

    fn page_of(ids: &[u64], total: u64, total_pages: u32) -> Page<CategorySummary> {
        Page {
            items: ids.iter().map(|id| category(*id, "c")).collect(),
            total,
            total_pages,
        }
    }

    #[test]
    fn slow_first_response_cannot_overwrite_newer_page() {
        let mut state = Collection::default();
        state.begin(1);
        state.begin(2);
        assert!(state.apply_page(2, page_of(&[20, 21], 2, 1)));
        assert!(!state.apply_page(1, page_of(&[10], 1, 1)));
        let ids: Vec<u64> = state.items.iter().map(Keyed::key).collect();
        assert_eq!(ids, vec![20, 21]);
        assert!(!state.loading);
    }

    #[test]
    fn stale_error_does_not_clobber_landed_page() {
        let mut state = Collection::default();
        state.begin(1);
        state.begin(2);
        assert!(state.apply_page(2, page_of(&[5], 1, 1)));
        assert!(!state.apply_error(1, "timed out"));
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_fetch_keeps_previous_rows() {
        let mut state = Collection::default();
        state.begin(1);
        state.apply_page(1, page_of(&[1, 2, 3], 3, 1));
        state.begin(2);
        assert!(state.loading);
        assert_eq!(state.items.len(), 3);
        assert!(state.apply_error(2, "boom"));
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(state.has_loaded());
    }

    #[test]
    fn begin_clears_error_from_previous_attempt() {
        let mut state: Collection<CategorySummary> = Collection::default();
        state.begin(1);
        state.apply_error(1, "boom");
        state.begin(2);
        assert!(state.error.is_none());
        assert!(state.loading);
        assert!(!state.has_loaded());
    }

    #[test]
    fn replace_row_swaps_matching_id_only() {
        let mut state = Collection::default();
        state.begin(1);
        state.apply_page(1, page_of(&[1, 2], 2, 1));
        let mut updated = category(2, "renamed");
        updated.is_featured = true;
        assert!(state.replace_row(updated));
        assert!(state.items[1].is_featured);
        assert!(!state.items[0].is_featured);
        assert!(!state.replace_row(category(9, "missing")));
    }

    #[test]
    fn remove_row_decrements_total_but_not_pages() {
        let mut state = Collection::default();
        state.begin(1);
        state.apply_page(1, page_of(&[1, 2, 3], 21, 3));
        assert!(state.remove_row(2));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total, 20);
        assert_eq!(state.total_pages, 3);
        assert!(!state.remove_row(2));
        assert_eq!(state.total, 20);
    }

    #[test]
    fn invalidate_discards_a_fetch_still_in_flight() {
        let mut state = Collection::default();
        state.begin(1);
        state.apply_page(1, page_of(&[1], 1, 1));
        state.begin(2);
        state.invalidate(3);
        assert!(!state.apply_page(2, page_of(&[9], 1, 1)));
        let ids: Vec<u64> = state.items.iter().map(Keyed::key).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn mutation_set_rejects_double_begin() {
        let mut busy = MutationSet::default();
        assert!(busy.begin(7));
        assert!(!busy.begin(7));
        assert!(busy.contains(7));
        busy.finish(7);
        assert!(!busy.contains(7));
        assert!(busy.is_empty());
        assert!(busy.begin(7));
    }
}
