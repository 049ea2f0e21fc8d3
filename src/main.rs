//! Zellij plugin entry point.
//!
//! Translates host events into library [`Event`]s and executes the resulting
//! [`Action`]s. Everything that touches the host lives here: web requests,
//! worker IPC, permissions, and focus.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │      Zellij Main Thread      │
//! │  ┌────────────────────────┐  │        ┌──────────────┐
//! │  │     State (plugin)     │──┼──GET──▶│   PokéAPI    │
//! │  └────────────────────────┘  │◀───────│              │
//! │        │ IPC ▲               │        └──────────────┘
//! │        ▼     │               │
//! │  ┌────────────────────────┐  │
//! │  │  PokedexWorker         │  │  ← filtering, sprite colors
//! │  └────────────────────────┘  │
//! └──────────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! List:
//! - `j`/`k`/`Down`/`Up`, `Ctrl+n`/`Ctrl+p`: move
//! - `Enter`: open detail
//! - `/`: search
//! - `r`: retry a failed page
//! - `q`: close
//!
//! Search (typing):
//! - characters and `Backspace` edit the query
//! - `Enter`: move focus to the results
//! - `Esc`: clear the query and leave search
//!
//! Search (results): list keys, plus `/` to edit the query again.
//!
//! Detail:
//! - `Esc`/`Backspace`/`h`/`Left`: back
//! - `r`: retry
//! - `q`: close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use pokedex::catalog::{CatalogResponse, RequestKind};
use pokedex::worker::{PokedexWorker, WorkerMessage, WorkerResponse, WORKER_NAME};
use pokedex::{handle_event, Action, Config, Event, InputMode, Screen, SearchFocus};

register_plugin!(State);
register_worker!(PokedexWorker, pokedex_worker, POKEDEX_WORKER);

struct State {
    app: pokedex::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: pokedex::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        pokedex::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = pokedex::initialize(&config);
        tracing::debug!(?config, "app state initialized");

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Some(match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            }),
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_result(status, body, &context)
            }
            zellij_tile::prelude::Event::CustomMessage(name, payload) => Self::map_custom_message(&name, &payload),
            _ => None,
        };
        let Some(our_event) = our_event else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        pokedex::ui::render(&self.app, rows, cols);
    }
}

impl State {
    const fn event_name(event: &zellij_tile::prelude::Event) -> &'static str {
        match event {
            zellij_tile::prelude::Event::Key(_) => "Key",
            zellij_tile::prelude::Event::WebRequestResult(..) => "WebRequestResult",
            zellij_tile::prelude::Event::CustomMessage(..) => "CustomMessage",
            zellij_tile::prelude::Event::PermissionRequestResult(_) => "PermissionRequestResult",
            _ => "Other",
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        if matches!(self.app.screen, Screen::Detail(_)) {
            return match key.bare_key {
                BareKey::Esc | BareKey::Backspace | BareKey::Left | BareKey::Char('h') => Some(Event::Back),
                BareKey::Char('r') => Some(Event::Retry),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Search(SearchFocus::Typing) => match key.bare_key {
                BareKey::Down => Some(Event::KeyDown),
                BareKey::Up => Some(Event::KeyUp),
                BareKey::Enter => Some(Event::FocusResults),
                BareKey::Esc => Some(Event::ExitSearch),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            },
            InputMode::Search(SearchFocus::Navigating) => match key.bare_key {
                BareKey::Char('/') | BareKey::Backspace => Some(Event::FocusSearchBar),
                BareKey::Esc => Some(Event::ExitSearch),
                _ => Self::map_list_key(&key.bare_key),
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Char('/') => Some(Event::SearchMode),
                BareKey::Char('r') => Some(Event::Retry),
                _ => Self::map_list_key(&key.bare_key),
            },
        }
    }

    fn map_list_key(key: &BareKey) -> Option<Event> {
        match key {
            BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
            BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
            BareKey::Enter => Some(Event::OpenDetail),
            BareKey::Char('q') => Some(Event::CloseFocus),
            _ => None,
        }
    }

    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        match RequestKind::from_context(context) {
            Ok(kind) => {
                tracing::debug!(?kind, status, body_len = body.len(), "web request finished");
                Some(Event::CatalogResponse {
                    kind,
                    response: CatalogResponse::new(status, body),
                })
            }
            Err(e) => {
                tracing::debug!(error = %e, "ignoring web result with unknown context");
                None
            }
        }
    }

    fn map_custom_message(name: &str, payload: &str) -> Option<Event> {
        if name != WORKER_NAME {
            tracing::debug!(message_name = %name, "ignoring custom message with unknown name");
            return None;
        }
        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => post_message_to(PluginMessage {
                worker_name: Some(WORKER_NAME.to_string()),
                name: WORKER_NAME.to_string(),
                payload,
            }),
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::Fetch(request) => {
                web_request(
                    request.url.as_str(),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.kind.to_context(),
                );
            }
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}
