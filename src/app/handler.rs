//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim (keys, web results, worker replies)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and its controllers
//! 4. Actions are collected and returned for execution
//!
//! `handle_event` is the only writer of application state. Host responses that
//! arrive for state that has moved on (a closed detail view, a superseded
//! search, a page offset no longer in flight) are dropped here.

use super::detail::DetailController;
use super::list::SearchStep;
use super::modes::{InputMode, Screen, SearchFocus};
use crate::app::{Action, AppState};
use crate::catalog::{CatalogResponse, RequestKind};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, host results, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Web access was granted; the first page can be requested.
    PermissionsGranted,
    /// Web access was refused.
    PermissionsDenied,

    /// Moves selection down; reaching the last row may load the next page.
    KeyDown,
    /// Moves selection up.
    KeyUp,
    /// Opens the detail screen for the selected entry.
    OpenDetail,
    /// Returns from the detail screen to the list.
    Back,
    /// Re-issues the failed request of the visible screen.
    Retry,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,

    /// An HTTP response delivered by the host.
    CatalogResponse {
        kind: RequestKind,
        response: CatalogResponse,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the shim's error path in place for
/// handlers that may fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::PermissionsGranted => {
            state.permission_denied = false;
            Ok((true, state.list.load_next_page().map(Action::Fetch).into_iter().collect()))
        }
        Event::PermissionsDenied => {
            tracing::warn!("web access denied");
            state.permission_denied = true;
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            state.move_selection_down();

            let mut actions = vec![];
            if state.at_last_row() && state.list.can_paginate() {
                tracing::debug!(selected = state.selected_index, "selection reached last row");
                actions.extend(state.list.load_next_page().map(Action::Fetch));
            }
            Ok((true, actions))
        }
        Event::KeyUp => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::OpenDetail => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            let Some(route) = state.selected_route() else {
                tracing::debug!("no entry selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    return Ok(exit_search(state));
                }
                return Ok((false, vec![]));
            };

            tracing::debug!(name = %route.name, color = %route.color.to_hex(), "opening detail");
            let (detail, request) = DetailController::open(state.repository.clone(), &route.name);
            state.detail = Some(detail);
            state.screen = Screen::Detail(route);
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::Back => {
            if state.screen == Screen::List {
                return Ok((false, vec![]));
            }
            state.detail = None;
            state.screen = Screen::List;
            Ok((true, vec![]))
        }
        Event::Retry => match (&state.screen, state.detail.as_mut()) {
            (Screen::Detail(_), Some(detail)) if detail.resource().message().is_some() => {
                Ok((true, vec![Action::Fetch(detail.retry())]))
            }
            (Screen::List, _) if state.list.load_error().is_some() => {
                Ok((true, state.list.retry().map(Action::Fetch).into_iter().collect()))
            }
            _ => Ok((false, vec![])),
        },
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query.clear();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.trim().is_empty() {
                return Ok(exit_search(state));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => Ok(exit_search(state)),
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, "search query updated");
            Ok((true, apply_query(state)))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.search_query.pop();
            Ok((true, apply_query(state)))
        }
        Event::CatalogResponse { kind, response } => Ok(handle_catalog_response(state, kind, response)),
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

/// Leaves search mode, clears the query, and restores the full list.
fn exit_search(state: &mut AppState) -> (bool, Vec<Action>) {
    tracing::debug!(query = %state.search_query, "exiting search mode");
    state.input_mode = InputMode::Normal;
    state.search_query.clear();
    let actions = apply_query(state);
    (true, actions)
}

/// Feeds the current query to the list controller.
fn apply_query(state: &mut AppState) -> Vec<Action> {
    state.selected_index = 0;
    match state.list.begin_search(&state.search_query) {
        SearchStep::Restored => vec![],
        SearchStep::Dispatch(job) => vec![Action::PostToWorker(WorkerMessage::filter_entries(job))],
    }
}

fn handle_catalog_response(state: &mut AppState, kind: &RequestKind, response: &CatalogResponse) -> (bool, Vec<Action>) {
    match kind {
        RequestKind::List { offset, .. } => {
            let appended = state.list.on_page_response(*offset, response);
            state.clamp_selection();

            let actions = if state.load_sprites {
                appended
                    .iter()
                    .filter(|entry| !state.colors.contains_key(&entry.number))
                    .map(|entry| Action::Fetch(state.repository.sprite_request(entry.number)))
                    .collect()
            } else {
                vec![]
            };
            (state.screen == Screen::List, actions)
        }
        RequestKind::Detail { name } => {
            let applied = match (&state.screen, state.detail.as_mut()) {
                (Screen::Detail(route), Some(detail)) if route.name == *name => detail.on_response(name, response),
                _ => {
                    tracing::debug!(name = %name, "dropping detail response for closed view");
                    false
                }
            };
            (applied, vec![])
        }
        RequestKind::Sprite { number } => {
            if !response.is_success() {
                tracing::debug!(number, status = response.status, "sprite fetch failed");
                return (false, vec![]);
            }
            (
                false,
                vec![Action::PostToWorker(WorkerMessage::extract_color(*number, response.body.clone()))],
            )
        }
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::EntriesFiltered { generation, results } => {
            let applied = state.list.apply_search_results(*generation, results.clone());
            if applied {
                state.clamp_selection();
            }
            (applied, vec![])
        }
        WorkerResponse::ColorExtracted { number, color } => match color {
            Some(color) => {
                state.colors.insert(*number, *color);
                (state.screen == Screen::List, vec![])
            }
            None => {
                tracing::debug!(number, "sprite has no opaque pixels");
                (false, vec![])
            }
        },
        WorkerResponse::Error { message } => {
            tracing::warn!(error = %message, "worker error");
            (false, vec![])
        }
    }
}

/// Short event label for spans; avoids dumping response bodies.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::PermissionsGranted => "PermissionsGranted",
        Event::PermissionsDenied => "PermissionsDenied",
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::OpenDetail => "OpenDetail",
        Event::Back => "Back",
        Event::Retry => "Retry",
        Event::CloseFocus => "CloseFocus",
        Event::SearchMode => "SearchMode",
        Event::FocusSearchBar => "FocusSearchBar",
        Event::FocusResults => "FocusResults",
        Event::ExitSearch => "ExitSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::CatalogResponse { .. } => "CatalogResponse",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Repository;
    use crate::domain::Rgb;
    use crate::ui::Theme;

    const PIKACHU: &str = include_str!("../../tests/fixtures/pikachu.json");

    fn page_body(count: u32, start: u32, names: &[&str]) -> Vec<u8> {
        let results: Vec<serde_json::Value> = names
            .iter()
            .zip(start..)
            .map(|(name, n)| serde_json::json!({"name": name, "url": format!("https://pokeapi.co/api/v2/pokemon/{n}/")}))
            .collect();
        serde_json::to_vec(&serde_json::json!({"count": count, "results": results})).unwrap()
    }

    fn fetches(actions: &[Action]) -> Vec<&RequestKind> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Fetch(request) => Some(&request.kind),
                _ => None,
            })
            .collect()
    }

    fn started(page_size: u32) -> (AppState, Vec<Action>) {
        let mut state = AppState::new(Repository::default(), page_size, Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        (state, actions)
    }

    fn deliver_page(state: &mut AppState, offset: u32, body: Vec<u8>) -> Vec<Action> {
        let event = Event::CatalogResponse {
            kind: RequestKind::List { limit: state.list.page_size(), offset },
            response: CatalogResponse::new(200, body),
        };
        handle_event(state, &event).unwrap().1
    }

    #[test]
    fn permission_grant_requests_first_page() {
        let (_, actions) = started(20);
        assert_eq!(fetches(&actions), [&RequestKind::List { limit: 20, offset: 0 }]);
    }

    #[test]
    fn loaded_page_requests_sprites() {
        let (mut state, _) = started(2);
        let actions = deliver_page(&mut state, 0, page_body(10, 1, &["bulbasaur", "ivysaur"]));
        assert_eq!(
            fetches(&actions),
            [&RequestKind::Sprite { number: 1 }, &RequestKind::Sprite { number: 2 }]
        );

        state.load_sprites = false;
        state.list.load_next_page();
        assert!(deliver_page(&mut state, 2, page_body(10, 3, &["venusaur"])).is_empty());
    }

    #[test]
    fn reaching_last_row_loads_next_page() {
        let (mut state, _) = started(2);
        deliver_page(&mut state, 0, page_body(10, 1, &["bulbasaur", "ivysaur"]));

        let (_, actions) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert_eq!(fetches(&actions), [&RequestKind::List { limit: 2, offset: 2 }]);

        // Already loading: no duplicate request.
        let (_, actions) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn retry_reissues_failed_page() {
        let (mut state, _) = started(20);
        let event = Event::CatalogResponse {
            kind: RequestKind::List { limit: 20, offset: 0 },
            response: CatalogResponse::new(500, vec![]),
        };
        handle_event(&mut state, &event).unwrap();
        assert!(state.list.load_error().is_some());

        let (_, actions) = handle_event(&mut state, &Event::Retry).unwrap();
        assert_eq!(fetches(&actions), [&RequestKind::List { limit: 20, offset: 0 }]);
    }

    #[test]
    fn typing_dispatches_filter_jobs() {
        let (mut state, _) = started(20);
        deliver_page(&mut state, 0, page_body(3, 4, &["charmander", "charmeleon", "charizard"]));

        handle_event(&mut state, &Event::SearchMode).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Char('z')).unwrap();
        let [Action::PostToWorker(WorkerMessage::FilterEntries { job, .. })] = actions.as_slice() else {
            panic!("expected a filter job, got {actions:?}");
        };
        assert_eq!(job.query, "z");
        assert_eq!(job.entries.len(), 3);

        let response = WorkerResponse::EntriesFiltered {
            generation: job.generation,
            results: crate::app::list::filter_entries(&job.entries, &job.query),
        };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        assert!(render);
        assert_eq!(state.selected_entry().unwrap().name, "Charizard");

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.list.displayed().len(), 3);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn detail_round_trip_preserves_list() {
        let (mut state, _) = started(20);
        deliver_page(&mut state, 0, page_body(1000, 24, &["arbok", "pikachu"]));
        state.colors.insert(25, Rgb::new(250, 210, 40));
        handle_event(&mut state, &Event::KeyDown).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::OpenDetail).unwrap();
        assert_eq!(fetches(&actions), [&RequestKind::Detail { name: "pikachu".into() }]);
        let Screen::Detail(route) = &state.screen else {
            panic!("expected detail screen");
        };
        assert_eq!(route.color, Rgb::new(250, 210, 40));

        let event = Event::CatalogResponse {
            kind: RequestKind::Detail { name: "pikachu".into() },
            response: CatalogResponse::new(200, PIKACHU.into()),
        };
        let (render, _) = handle_event(&mut state, &event).unwrap();
        assert!(render);
        assert_eq!(state.detail.as_ref().unwrap().resource().data().unwrap().id, 25);

        handle_event(&mut state, &Event::Back).unwrap();
        assert_eq!(state.screen, Screen::List);
        assert_eq!(state.selected_index, 1);
        assert_eq!(state.list.displayed().len(), 2);
    }

    #[test]
    fn late_detail_responses_are_dropped() {
        let (mut state, _) = started(20);
        deliver_page(&mut state, 0, page_body(1000, 25, &["pikachu"]));
        handle_event(&mut state, &Event::OpenDetail).unwrap();
        handle_event(&mut state, &Event::Back).unwrap();

        let event = Event::CatalogResponse {
            kind: RequestKind::Detail { name: "pikachu".into() },
            response: CatalogResponse::new(200, PIKACHU.into()),
        };
        let (render, _) = handle_event(&mut state, &event).unwrap();
        assert!(!render);
        assert!(state.detail.is_none());
    }

    #[test]
    fn sprites_are_forwarded_to_worker() {
        let (mut state, _) = started(20);
        let event = Event::CatalogResponse {
            kind: RequestKind::Sprite { number: 7 },
            response: CatalogResponse::new(200, vec![1, 2, 3]),
        };
        let (_, actions) = handle_event(&mut state, &event).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::ExtractColor { number: 7, .. })]
        ));

        let response = WorkerResponse::ColorExtracted { number: 7, color: Some(Rgb::new(9, 9, 9)) };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        assert_eq!(state.colors.get(&7), Some(&Rgb::new(9, 9, 9)));
    }
}
