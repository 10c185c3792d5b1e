//! Committed list-query state shared by every paginated page.
//!
//! # Design
//! - One [`ListQuery`] per page controller; nothing here is global.
//! - The raw search box text never reaches the server; only the
//!   debounce-committed term is serialised.
//! - Every mutation except page navigation snaps back to page 1 so a filter
//!   change can never leave the user stranded past the new last page.

use std::collections::BTreeMap;
use std::fmt::Write;

/// Sort direction serialised as `sortOrder=asc|desc`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDir {
    /// Wire value for the `sortOrder` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Natural first direction for a sort key: recency and engagement counters
/// read newest/highest first, name-like keys read alphabetically.
#[must_use]
pub fn default_dir(key: &str) -> SortDir {
    match key {
        "created_at" | "updated_at" | "deleted_at" | "likes" | "views" | "count"
        | "couplet_count" | "poet_count" => SortDir::Desc,
        _ => SortDir::Asc,
    }
}

/// Query state for one paginated collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// Raw text echoed in the search box; never serialised.
    pub search_input: String,
    /// Debounce-committed search term; the only search text requests see.
    pub search: String,
    /// Active sort key, serialised as `sortBy`.
    pub sort_key: &'static str,
    /// Active sort direction.
    pub sort_dir: SortDir,
    /// Named filters serialised as extra query parameters; empty values are
    /// treated as "no filter" and skipped.
    pub filters: BTreeMap<&'static str, String>,
    /// Current 1-based page.
    pub page: u32,
    /// Rows per page.
    pub page_size: u32,
}

impl ListQuery {
    /// Fresh query on page 1 with the key's natural sort direction.
    #[must_use]
    pub fn new(sort_key: &'static str, page_size: u32) -> Self {
        Self {
            search_input: String::new(),
            search: String::new(),
            sort_key,
            sort_dir: default_dir(sort_key),
            filters: BTreeMap::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Builder-style filter preset for a page's initial query.
    #[must_use]
    pub fn with_filter(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.filters.insert(name, value.into());
        self
    }

    /// Updates the raw search echo without touching the committed term.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Commits a debounced search term. No-op when the trimmed term matches
    /// the committed one, so a settled debounce never refetches.
    pub fn commit_search(&mut self, text: &str) {
        let term = text.trim();
        if term == self.search {
            return;
        }
        self.search = term.to_string();
        self.page = 1;
    }

    /// Selects a sort key from a dropdown: switching keys applies the key's
    /// natural direction, re-selecting the active key changes nothing.
    pub fn set_sort(&mut self, key: &'static str) {
        if key == self.sort_key {
            return;
        }
        self.sort_key = key;
        self.sort_dir = default_dir(key);
        self.page = 1;
    }

    /// Header-click sort: a repeat click on the active key flips direction,
    /// a new key starts at its natural direction.
    pub fn toggle_sort(&mut self, key: &'static str) {
        if key == self.sort_key {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_key = key;
            self.sort_dir = default_dir(key);
        }
        self.page = 1;
    }

    /// Sets a named filter; an empty value clears it. Either way the page
    /// snaps back to 1.
    pub fn set_filter(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(name);
        } else {
            self.filters.insert(name, value);
        }
        self.page = 1;
    }

    /// Removes a named filter and returns to page 1.
    pub fn clear_filter(&mut self, name: &str) {
        if self.filters.remove(name).is_some() {
            self.page = 1;
        }
    }

    /// Current value of a named filter, empty when unset.
    #[must_use]
    pub fn filter(&self, name: &str) -> &str {
        self.filters.get(name).map_or("", String::as_str)
    }

    /// Arrow for a sortable column header: direction glyph when the column
    /// is the active sort, empty otherwise.
    #[must_use]
    pub fn sort_marker(&self, key: &str) -> &'static str {
        if self.sort_key == key {
            match self.sort_dir {
                SortDir::Asc => "\u{25b4}",
                SortDir::Desc => "\u{25be}",
            }
        } else {
            ""
        }
    }

    /// Navigates to a page. Out-of-bounds targets and the current page are
    /// ignored, so repeated clicks on one control never refetch.
    pub fn set_page(&mut self, page: u32, total_pages: u32) {
        if page >= 1 && page <= total_pages.max(1) && page != self.page {
            self.page = page;
        }
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: u32) {
        if page_size >= 1 && page_size != self.page_size {
            self.page_size = page_size;
            self.page = 1;
        }
    }

    /// Serialises the committed state as the request query string. The
    /// output doubles as the fetch key: two queries with equal strings hit
    /// the server identically, so effect dependencies compare it directly.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut query = format!("page={}&limit={}", self.page, self.page_size);
        if !self.search.is_empty() {
            let _ = write!(query, "&search={}", urlencoding::encode(&self.search));
        }
        let _ = write!(
            query,
            "&sortBy={}&sortOrder={}",
            self.sort_key,
            self.sort_dir.as_str()
        );
        for (name, value) in &self.filters {
            if !value.is_empty() {
                let _ = write!(query, "&{name}={}", urlencoding::encode(value));
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_query_starts_on_page_one_with_natural_direction() {
        let query = ListQuery::new("created_at", 10);
        assert_eq!(query.page, 1);
        assert_eq!(query.sort_dir, SortDir::Desc);
        assert_eq!(ListQuery::new("name", 10).sort_dir, SortDir::Asc);
    }

    #[test]
    fn commit_search_resets_page_and_trims() {
        let mut query = ListQuery::new("name", 10);
        query.set_page(4, 9);
        query.commit_search("  shah  ");
        assert_eq!(query.search, "shah");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn committing_unchanged_search_keeps_page() {
        let mut query = ListQuery::new("name", 10);
        query.commit_search("ghazal");
        query.set_page(3, 5);
        query.commit_search("ghazal ");
        assert_eq!(query.page, 3);
    }

    #[test]
    fn sort_marker_tracks_only_the_active_column() {
        let mut query = ListQuery::new("sindhi_name", 10);
        assert_eq!(query.sort_marker("sindhi_name"), "\u{25b4}");
        assert_eq!(query.sort_marker("couplet_count"), "");
        query.toggle_sort("sindhi_name");
        assert_eq!(query.sort_marker("sindhi_name"), "\u{25be}");
    }

    #[test]
    fn raw_echo_does_not_change_the_query_string() {
        let mut query = ListQuery::new("name", 10);
        let before = query.query_string();
        query.set_search_input("gha");
        assert_eq!(query.query_string(), before);
    }

    #[test]
    fn toggle_sort_flips_same_key_and_resets_new_key() {
        let mut query = ListQuery::new("name", 10);
        query.set_page(2, 4);
        query.toggle_sort("name");
        assert_eq!(query.sort_dir, SortDir::Desc);
        assert_eq!(query.page, 1);
        query.toggle_sort("likes");
        assert_eq!(query.sort_key, "likes");
        assert_eq!(query.sort_dir, SortDir::Desc);
    }

    #[test]
    fn set_sort_ignores_reselecting_the_active_key() {
        let mut query = ListQuery::new("created_at", 12);
        query.set_page(5, 8);
        query.set_sort("created_at");
        assert_eq!(query.page, 5);
        query.set_sort("likes");
        assert_eq!(query.page, 1);
        assert_eq!(query.sort_dir, SortDir::Desc);
    }

    #[test]
    fn filters_reset_page_and_empty_value_clears() {
        let mut query = ListQuery::new("name", 10);
        query.set_page(3, 6);
        query.set_filter("category", "kafi");
        assert_eq!(query.page, 1);
        assert_eq!(query.filter("category"), "kafi");
        query.set_page(2, 6);
        query.set_filter("category", "");
        assert_eq!(query.page, 1);
        assert!(query.filters.is_empty());
    }

    #[test]
    fn set_page_ignores_out_of_bounds_targets() {
        let mut query = ListQuery::new("name", 10);
        query.set_page(0, 5);
        assert_eq!(query.page, 1);
        query.set_page(6, 5);
        assert_eq!(query.page, 1);
        query.set_page(5, 5);
        assert_eq!(query.page, 5);
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let mut query = ListQuery::new("name", 10);
        query.set_page(4, 9);
        query.set_page_size(25);
        assert_eq!(query.page, 1);
        query.set_page(1, 4);
        query.set_page_size(25);
        assert_eq!(query.page_size, 25);
    }

    #[test]
    fn query_string_serialises_all_committed_state() {
        let mut query = ListQuery::new("created_at", 12).with_filter("category", "kafi");
        query.commit_search("سنڌ ja");
        query.set_page(2, 3);
        assert_eq!(
            query.query_string(),
            "page=2&limit=12&search=%D8%B3%D9%86%DA%8C%20ja&sortBy=created_at&sortOrder=desc&category=kafi"
        );
    }

    #[test]
    fn query_string_skips_empty_search_and_filters() {
        let query = ListQuery::new("name", 10);
        assert_eq!(query.query_string(), "page=1&limit=10&sortBy=name&sortOrder=asc");
    }

    #[test]
    fn clear_filter_resets_page_only_when_something_was_set() {
        let mut query = ListQuery::new("name", 10);
        query.set_filter("era", "classical");
        query.set_page(4, 7);
        query.clear_filter("era");
        assert_eq!(query.page, 1);
        query.set_page(3, 7);
        query.clear_filter("era");
        assert_eq!(query.page, 3);
    }

    #[test]
    fn ghazal_collection_sort_flip_lands_on_page_one() {
        // 34 rows at 12 a page gives 3 pages; flipping to a count sort from
        // page 2 must land back on page 1 with the descending default.
        let mut query = ListQuery::new("name", 12);
        query.set_page(2, 3);
        query.toggle_sort("count");
        assert_eq!(
            query.query_string(),
            "page=1&limit=12&sortBy=count&sortOrder=desc"
        );
    }
}
