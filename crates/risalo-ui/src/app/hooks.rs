//! Page-controller hook shared by every paginated screen.
//!
//! # Design
//! - Rows live behind `Rc<RefCell<..>>` so async completions mutate the
//!   current state rather than a render-time snapshot; a version counter
//!   drives re-renders.
//! - The serialised query string is the effect key, so a fetch fires
//!   exactly when the server would see a different request. Search echo
//!   changes state without touching the key.

use crate::app::api::ApiCtx;
use crate::core::collection::{Collection, Keyed, RowId};
use crate::core::query::ListQuery;
use gloo::console;
use serde::de::DeserializeOwned;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use yew::prelude::*;

/// Controller for one paginated collection: query state, fetched rows and
/// the mutators views wire to controls.
pub(crate) struct CollectionHandle<T: 'static> {
    query: UseStateHandle<ListQuery>,
    state: Rc<RefCell<Collection<T>>>,
    version: UseStateHandle<u64>,
    refresh: UseStateHandle<u64>,
}

impl<T: 'static> Clone for CollectionHandle<T> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            state: Rc::clone(&self.state),
            version: self.version.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

/// Drives one paginated collection against `GET /{collection}`.
///
/// Fetches whenever the committed query changes, tags each fetch with a
/// fresh sequence number and lets the collection state discard stale
/// arrivals.
#[hook]
pub(crate) fn use_collection<T>(collection: &'static str, initial: ListQuery) -> CollectionHandle<T>
where
    T: Keyed + DeserializeOwned + 'static,
{
    let query = use_state(move || initial);
    let state = use_mut_ref(Collection::<T>::default);
    let version = use_state(|| 0_u64);
    let refresh = use_state(|| 0_u64);
    let seq_counter = use_mut_ref(|| 0_u64);
    let api_ctx = use_context::<ApiCtx>();

    {
        let state = Rc::clone(&state);
        let version = version.clone();
        let seq_counter = Rc::clone(&seq_counter);
        use_effect_with_deps(
            move |(query_string, _refresh): &(String, u64)| {
                if let Some(api) = api_ctx {
                    let seq = {
                        let mut counter = seq_counter.borrow_mut();
                        *counter += 1;
                        *counter
                    };
                    state.borrow_mut().begin(seq);
                    version.set(*version + 1);
                    let client = Rc::clone(&api.client);
                    let query_string = query_string.clone();
                    let task_state = Rc::clone(&state);
                    let task_version = version.clone();
                    yew::platform::spawn_local(async move {
                        let applied = match client.fetch_page::<T>(collection, &query_string).await
                        {
                            Ok(page) => task_state.borrow_mut().apply_page(seq, page),
                            Err(err) => {
                                console::error!("collection fetch failed", collection, err.to_string());
                                task_state.borrow_mut().apply_error(seq, err.to_string())
                            }
                        };
                        if applied {
                            task_version.set(*task_version + 1);
                        }
                    });
                }
                // Late resolutions after unmount must find a newer seq.
                move || {
                    let mut counter = seq_counter.borrow_mut();
                    *counter += 1;
                    state.borrow_mut().invalidate(*counter);
                }
            },
            (query.query_string(), *refresh),
        );
    }

    CollectionHandle {
        query,
        state,
        version,
        refresh,
    }
}

impl<T: Keyed + 'static> CollectionHandle<T> {
    /// Committed query driving the current rows.
    pub(crate) fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Current rows and fetch status.
    pub(crate) fn state(&self) -> Ref<'_, Collection<T>> {
        self.state.borrow()
    }

    /// Mirrors raw search-box text without fetching.
    pub(crate) fn echo_search(&self, text: String) {
        self.update_query(|query| query.set_search_input(text));
    }

    /// Commits a debounced search term.
    pub(crate) fn commit_search(&self, text: &str) {
        self.update_query(|query| query.commit_search(text));
    }

    /// Header-click sort: repeat clicks flip direction.
    pub(crate) fn toggle_sort(&self, key: &'static str) {
        self.update_query(|query| query.toggle_sort(key));
    }

    /// Dropdown sort: re-selecting the active key is a no-op.
    pub(crate) fn set_sort(&self, key: &'static str) {
        self.update_query(|query| query.set_sort(key));
    }

    /// Sets or clears a named filter.
    pub(crate) fn set_filter(&self, name: &'static str, value: String) {
        self.update_query(|query| query.set_filter(name, value));
    }

    /// Navigates to a page; out-of-range and same-page targets do nothing.
    pub(crate) fn set_page(&self, page: u32) {
        let total_pages = self.state.borrow().total_pages;
        self.update_query(|query| query.set_page(page, total_pages));
    }

    /// Changes the page size and returns to page 1.
    pub(crate) fn set_page_size(&self, page_size: u32) {
        self.update_query(|query| query.set_page_size(page_size));
    }

    /// Forces a refetch of the current query.
    pub(crate) fn refetch(&self) {
        self.refresh.set(*self.refresh + 1);
    }

    /// Swaps in a server-confirmed row after a mutation.
    pub(crate) fn replace_row(&self, row: T) {
        if self.state.borrow_mut().replace_row(row) {
            self.mark_dirty();
        }
    }

    /// Drops a row after a confirmed delete.
    pub(crate) fn remove_row(&self, id: RowId) {
        if self.state.borrow_mut().remove_row(id) {
            self.mark_dirty();
        }
    }

    fn mark_dirty(&self) {
        self.version.set(*self.version + 1);
    }

    fn update_query(&self, mutate: impl FnOnce(&mut ListQuery)) {
        let mut next = (*self.query).clone();
        mutate(&mut next);
        if next != *self.query {
            self.query.set(next);
        }
    }
}

/// Page-local state a view mutates from async completions: the closure
/// always sees the current value, never a render-time snapshot.
pub(crate) struct SlotHandle<T: 'static> {
    value: Rc<RefCell<T>>,
    version: UseStateHandle<u64>,
}

impl<T: 'static> Clone for SlotHandle<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            version: self.version.clone(),
        }
    }
}

/// State slot for notice slots, in-flight row sets and the like.
#[hook]
pub(crate) fn use_slot<T: Default + 'static>() -> SlotHandle<T> {
    let value = use_mut_ref(T::default);
    let version = use_state(|| 0_u64);
    SlotHandle { value, version }
}

impl<T: 'static> SlotHandle<T> {
    /// Current value, for rendering.
    pub(crate) fn read(&self) -> Ref<'_, T> {
        self.value.borrow()
    }

    /// Mutates the current value and schedules a re-render.
    pub(crate) fn mutate<R>(&self, apply: impl FnOnce(&mut T) -> R) -> R {
        let result = apply(&mut self.value.borrow_mut());
        self.version.set(*self.version + 1);
        result
    }
}
