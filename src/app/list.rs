//! Paginated list loading and search state.
//!
//! [`ListController`] owns the pagination state (page index, accumulated
//! entries, end flag, loading flag, last error) and the search state (query,
//! snapshot, filtered results, generation). Only the event handler calls its
//! mutating methods, so the controller is never touched concurrently.
//!
//! # Pagination
//!
//! ```text
//! load_next_page ──► CatalogRequest ──► host ──► on_page_response
//!      ▲                                              │
//!      └──────────── retry (same offset) ◄── Error ───┤
//!                                                     └─ Success: append, advance
//! ```
//!
//! # Search
//!
//! Filtering runs on the worker thread. [`ListController::begin_search`]
//! returns a [`FilterJob`] tagged with a generation number, and
//! [`ListController::apply_search_results`] drops results from any generation
//! other than the latest.

use crate::catalog::{CatalogRequest, CatalogResponse, ListPayload, Repository};
use crate::domain::{PokedexEntry, Resource};
use serde::{Deserialize, Serialize};

/// Default number of entries requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A unit of filtering work for the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterJob {
    pub generation: u64,
    pub query: String,
    pub entries: Vec<PokedexEntry>,
}

/// Outcome of a query change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// The query became empty and the unfiltered list is shown again.
    Restored,
    /// The query must be filtered off-thread.
    Dispatch(FilterJob),
}

#[derive(Debug, Clone, Default)]
struct SearchState {
    query: String,
    active: bool,
    /// Source list for filtering, captured at the first non-empty query.
    snapshot: Option<Vec<PokedexEntry>>,
    results: Vec<PokedexEntry>,
    generation: u64,
}

/// Pagination and search state behind the list screen.
#[derive(Debug, Clone)]
pub struct ListController {
    repository: Repository,
    page_size: u32,
    page_index: u32,
    accumulated: Vec<PokedexEntry>,
    end_reached: bool,
    is_loading: bool,
    in_flight_offset: Option<u32>,
    load_error: String,
    search: SearchState,
}

impl ListController {
    /// Creates an empty controller. A `page_size` of zero falls back to
    /// [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn new(repository: Repository, page_size: u32) -> Self {
        Self {
            repository,
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            page_index: 0,
            accumulated: Vec::new(),
            end_reached: false,
            is_loading: false,
            in_flight_offset: None,
            load_error: String::new(),
            search: SearchState::default(),
        }
    }

    /// Starts loading the next page.
    ///
    /// Returns `None` while a page is already in flight; otherwise marks the
    /// controller as loading and returns the request for offset
    /// `page_index * page_size`.
    pub fn load_next_page(&mut self) -> Option<CatalogRequest> {
        if self.is_loading {
            tracing::debug!(offset = ?self.in_flight_offset, "page already loading, skipping");
            return None;
        }

        let offset = self.next_offset();
        self.is_loading = true;
        self.in_flight_offset = Some(offset);

        tracing::debug!(page_index = self.page_index, offset, limit = self.page_size, "loading page");
        Some(self.repository.list_request(self.page_size, offset))
    }

    /// Re-issues the request for the page that last failed.
    ///
    /// `page_index` only advances on success, so this targets the same offset.
    pub fn retry(&mut self) -> Option<CatalogRequest> {
        tracing::debug!(error = %self.load_error, "retrying page load");
        self.load_next_page()
    }

    /// Resolves the host's response for the page at `offset`.
    ///
    /// Returns the entries that were appended so the caller can request their
    /// sprites. Responses for any offset other than the one in flight are
    /// ignored.
    pub fn on_page_response(&mut self, offset: u32, response: &CatalogResponse) -> Vec<PokedexEntry> {
        if self.in_flight_offset != Some(offset) {
            tracing::debug!(offset, in_flight = ?self.in_flight_offset, "ignoring response for stale page");
            return Vec::new();
        }
        let resource = self.repository.get_list(response);
        self.apply_page(resource)
    }

    /// Applies a resolved page to the pagination state.
    ///
    /// On success the page index advances, `end_reached` is latched once the
    /// fetched pages cover the reported total, and the transformed entries are
    /// appended. On error only the error message and loading flag change.
    ///
    /// The end check runs after the advance, so it compares everything fetched
    /// so far (pages × page size) against the total; checking before would
    /// leave one trailing request that can only return an empty page.
    pub fn apply_page(&mut self, resource: Resource<ListPayload>) -> Vec<PokedexEntry> {
        match resource {
            Resource::Loading => Vec::new(),
            Resource::Success(payload) => {
                self.page_index += 1;
                let fetched = u64::from(self.page_index) * u64::from(self.page_size);
                if fetched >= u64::from(payload.count) {
                    self.end_reached = true;
                }

                let entries = payload.entries();
                self.load_error.clear();
                self.is_loading = false;
                self.in_flight_offset = None;
                self.accumulated.extend(entries.iter().cloned());
                if let Some(snapshot) = self.search.snapshot.as_mut() {
                    snapshot.extend(entries.iter().cloned());
                }

                tracing::debug!(
                    page_index = self.page_index,
                    received = entries.len(),
                    total = payload.count,
                    accumulated = self.accumulated.len(),
                    end_reached = self.end_reached,
                    "page loaded"
                );
                entries
            }
            Resource::Error(message) => {
                tracing::warn!(page_index = self.page_index, error = %message, "page load failed");
                self.load_error = message;
                self.is_loading = false;
                self.in_flight_offset = None;
                Vec::new()
            }
        }
    }

    /// Updates the search query.
    ///
    /// An empty (after trimming) query restores the unfiltered list and
    /// releases the snapshot. Anything else captures the snapshot on first use
    /// and yields a [`FilterJob`] for the worker.
    pub fn begin_search(&mut self, query: &str) -> SearchStep {
        self.search.query = query.to_string();
        self.search.generation += 1;
        let trimmed = query.trim();

        if trimmed.is_empty() {
            tracing::debug!(generation = self.search.generation, "search cleared, restoring list");
            self.search.active = false;
            self.search.snapshot = None;
            self.search.results.clear();
            return SearchStep::Restored;
        }

        let accumulated = &self.accumulated;
        let source = self.search.snapshot.get_or_insert_with(|| accumulated.clone());

        tracing::debug!(
            generation = self.search.generation,
            query = trimmed,
            source_len = source.len(),
            "dispatching search"
        );
        SearchStep::Dispatch(FilterJob {
            generation: self.search.generation,
            query: trimmed.to_string(),
            entries: source.clone(),
        })
    }

    /// Installs filter results if they belong to the latest search.
    ///
    /// Returns `false` for superseded generations.
    pub fn apply_search_results(&mut self, generation: u64, results: Vec<PokedexEntry>) -> bool {
        if generation != self.search.generation || self.search.snapshot.is_none() {
            tracing::debug!(
                generation,
                current = self.search.generation,
                "dropping stale search results"
            );
            return false;
        }
        tracing::debug!(generation, matches = results.len(), "search results applied");
        self.search.active = true;
        self.search.results = results;
        true
    }

    /// The list currently shown: filter results while a search is active,
    /// otherwise every accumulated entry.
    #[must_use]
    pub fn displayed(&self) -> &[PokedexEntry] {
        if self.search.active {
            &self.search.results
        } else {
            &self.accumulated
        }
    }

    /// Whether reaching the end of the list should fetch another page.
    #[must_use]
    pub const fn can_paginate(&self) -> bool {
        !self.end_reached && !self.is_loading && !self.search.active
    }

    #[must_use]
    pub const fn next_offset(&self) -> u32 {
        self.page_index.saturating_mul(self.page_size)
    }

    #[must_use]
    pub const fn page_index(&self) -> u32 {
        self.page_index
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn accumulated(&self) -> &[PokedexEntry] {
        &self.accumulated
    }

    #[must_use]
    pub const fn end_reached(&self) -> bool {
        self.end_reached
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Last page error, `None` once a page succeeds.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        if self.load_error.is_empty() {
            None
        } else {
            Some(&self.load_error)
        }
    }

    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.search.active
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.search.query
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.search.generation
    }
}

/// Keeps the entries that match `query` by name or number, preserving order.
#[must_use]
pub fn filter_entries(entries: &[PokedexEntry], query: &str) -> Vec<PokedexEntry> {
    entries.iter().filter(|entry| entry.matches(query)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NamedResource, RequestKind};

    fn page(count: u32, start: u32, names: &[&str]) -> ListPayload {
        ListPayload {
            count,
            results: names
                .iter()
                .zip(start..)
                .map(|(name, n)| NamedResource {
                    name: (*name).to_string(),
                    url: format!("https://pokeapi.co/api/v2/pokemon/{n}/"),
                })
                .collect(),
        }
    }

    fn controller(page_size: u32) -> ListController {
        ListController::new(Repository::default(), page_size)
    }

    fn names(entries: &[PokedexEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn first_request_targets_offset_zero() {
        let mut list = controller(20);
        let request = list.load_next_page().unwrap();
        assert_eq!(request.kind, RequestKind::List { limit: 20, offset: 0 });
        assert!(list.is_loading());
    }

    #[test]
    fn second_load_while_in_flight_is_refused() {
        let mut list = controller(20);
        assert!(list.load_next_page().is_some());
        assert!(list.load_next_page().is_none());
    }

    #[test]
    fn accumulated_grows_by_each_page() {
        let mut list = controller(2);

        list.load_next_page();
        let first = list.apply_page(Resource::Success(page(5, 1, &["bulbasaur", "ivysaur"])));
        assert_eq!(first.len(), 2);

        let request = list.load_next_page().unwrap();
        assert_eq!(request.kind, RequestKind::List { limit: 2, offset: 2 });
        list.apply_page(Resource::Success(page(5, 3, &["venusaur", "charmander"])));

        assert_eq!(list.accumulated().len(), 4);
        assert_eq!(list.page_index(), 2);
        assert!(!list.end_reached());
        assert_eq!(names(list.accumulated()), ["Bulbasaur", "Ivysaur", "Venusaur", "Charmander"]);
    }

    #[test]
    fn end_is_reached_once_pages_cover_the_total() {
        let mut list = controller(2);
        list.load_next_page();
        list.apply_page(Resource::Success(page(3, 1, &["a", "b"])));
        assert!(!list.end_reached());

        list.load_next_page();
        list.apply_page(Resource::Success(page(3, 3, &["c"])));
        assert!(list.end_reached());
        assert!(!list.can_paginate());
    }

    #[test]
    fn single_page_catalog_ends_without_another_request() {
        let mut list = controller(20);
        list.load_next_page();
        list.apply_page(Resource::Success(page(3, 1, &["bulbasaur", "ivysaur", "venusaur"])));

        assert_eq!(list.page_index(), 1);
        assert!(list.end_reached());
        assert!(list.load_next_page().is_none());
    }

    #[test]
    fn end_reached_stays_latched() {
        let mut list = controller(2);
        list.load_next_page();
        list.apply_page(Resource::Success(page(2, 1, &["a", "b"])));
        assert!(list.end_reached());

        // The catalog grew, but the flag never resets.
        list.load_next_page();
        list.apply_page(Resource::Success(page(50, 3, &["c", "d"])));
        assert!(list.end_reached());
    }

    #[test]
    fn failed_page_keeps_position_and_retry_reuses_offset() {
        let mut list = controller(20);
        list.load_next_page();
        list.apply_page(Resource::Success(page(100, 1, &["bulbasaur"])));

        list.load_next_page();
        list.apply_page(Resource::Error("Request failed with HTTP status 500".into()));

        assert_eq!(list.page_index(), 1);
        assert_eq!(list.accumulated().len(), 1);
        assert_eq!(list.load_error(), Some("Request failed with HTTP status 500"));
        assert!(!list.is_loading());

        let retry = list.retry().unwrap();
        assert_eq!(retry.kind, RequestKind::List { limit: 20, offset: 20 });
    }

    #[test]
    fn success_clears_previous_error() {
        let mut list = controller(20);
        list.load_next_page();
        list.apply_page(Resource::Error("boom".into()));
        list.retry();
        list.apply_page(Resource::Success(page(100, 1, &["bulbasaur"])));
        assert_eq!(list.load_error(), None);
    }

    #[test]
    fn responses_for_other_offsets_are_ignored() {
        let mut list = controller(20);
        list.load_next_page();
        let body = serde_json::to_vec(&serde_json::json!({
            "count": 100,
            "results": [{"name": "mew", "url": "https://pokeapi.co/api/v2/pokemon/151/"}]
        }))
        .unwrap();

        assert!(list.on_page_response(40, &CatalogResponse::new(200, body.clone())).is_empty());
        assert!(list.is_loading());

        let appended = list.on_page_response(0, &CatalogResponse::new(200, body));
        assert_eq!(names(&appended), ["Mew"]);
        assert!(!list.is_loading());
    }

    #[test]
    fn transport_failure_surfaces_as_error() {
        let mut list = controller(20);
        list.load_next_page();
        list.on_page_response(0, &CatalogResponse::new(503, vec![]));
        assert_eq!(list.load_error(), Some("Request failed with HTTP status 503"));
        assert_eq!(list.page_index(), 0);
    }

    fn loaded(names: &[&str]) -> ListController {
        let mut list = controller(50);
        list.load_next_page();
        list.apply_page(Resource::Success(page(1000, 1, names)));
        list
    }

    fn run_search(list: &mut ListController, query: &str) -> SearchStep {
        let step = list.begin_search(query);
        if let SearchStep::Dispatch(job) = &step {
            let results = filter_entries(&job.entries, &job.query);
            assert!(list.apply_search_results(job.generation, results));
        }
        step
    }

    #[test]
    fn search_matches_names_and_numbers() {
        let mut list = loaded(&["bulbasaur", "ivysaur", "venusaur", "charmander", "charmeleon", "charizard"]);

        run_search(&mut list, "char");
        assert_eq!(names(list.displayed()), ["Charmander", "Charmeleon", "Charizard"]);
        assert!(list.is_searching());

        run_search(&mut list, "2");
        assert_eq!(names(list.displayed()), ["Ivysaur"]);
    }

    #[test]
    fn empty_query_restores_the_exact_list() {
        let mut list = loaded(&["bulbasaur", "ivysaur", "venusaur"]);
        let before = list.displayed().to_vec();

        run_search(&mut list, "ivy");
        assert_eq!(list.displayed().len(), 1);

        assert_eq!(list.begin_search("   "), SearchStep::Restored);
        assert_eq!(list.displayed(), before.as_slice());
        assert!(!list.is_searching());
        assert!(list.can_paginate());
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut list = loaded(&["bulbasaur", "ivysaur"]);

        let SearchStep::Dispatch(first) = list.begin_search("b") else {
            panic!("expected dispatch");
        };
        let SearchStep::Dispatch(second) = list.begin_search("bu") else {
            panic!("expected dispatch");
        };

        assert!(!list.apply_search_results(first.generation, vec![]));
        assert!(list.apply_search_results(second.generation, filter_entries(&second.entries, &second.query)));
        assert_eq!(names(list.displayed()), ["Bulbasaur"]);
    }

    #[test]
    fn results_after_clearing_are_dropped() {
        let mut list = loaded(&["bulbasaur"]);
        let SearchStep::Dispatch(job) = list.begin_search("bulb") else {
            panic!("expected dispatch");
        };
        list.begin_search("");
        assert!(!list.apply_search_results(job.generation, vec![]));
        assert!(!list.is_searching());
    }

    #[test]
    fn pages_landing_during_search_join_the_snapshot_only() {
        let mut list = controller(2);
        list.load_next_page();
        list.apply_page(Resource::Success(page(10, 1, &["bulbasaur", "ivysaur"])));

        run_search(&mut list, "saur");
        list.load_next_page();
        list.apply_page(Resource::Success(page(10, 3, &["venusaur", "charmander"])));

        assert_eq!(names(list.displayed()), ["Bulbasaur", "Ivysaur"]);
        assert_eq!(list.accumulated().len(), 4);

        // The next keystroke filters the grown snapshot.
        run_search(&mut list, "saur ");
        assert_eq!(names(list.displayed()), ["Bulbasaur", "Ivysaur", "Venusaur"]);
    }

    #[test]
    fn searching_suspends_pagination() {
        let mut list = loaded(&["bulbasaur"]);
        assert!(list.can_paginate());
        run_search(&mut list, "bulb");
        assert!(!list.can_paginate());
    }

    #[test]
    fn zero_page_size_falls_back() {
        assert_eq!(controller(0).page_size(), DEFAULT_PAGE_SIZE);
    }
}
