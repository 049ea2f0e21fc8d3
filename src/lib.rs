//! Pokédex: a Zellij plugin for browsing the PokéAPI catalog.
//!
//! The plugin pages through the national Pokédex, filters loaded entries by
//! name, and opens a detail card with types, measurements, and base stats. Each
//! row carries a swatch of its sprite's dominant color, computed off the UI
//! thread.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, list/detail controllers          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - URL builder │   │ - Filtering   │
//! │ - Theming     │   │ - Decoding    │   │ - Sprite color│
//! │ - Components  │   │ - Repository  │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Imaging & Infrastructure                   │
//! │  - Entries, detail records, Resource, errors        │
//! │  - Dominant color extraction (imaging/)             │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing → OpenTelemetry → OTLP JSON file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The application layer never performs I/O. Events go in, [`Action`]s come
//! out, and main.rs turns actions into web requests, worker messages, or
//! focus changes. Responses come back as events.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/pokedex.wasm" {
//!         base_url "https://pokeapi.co/api/v2/"
//!         page_size "20"
//!         load_sprites "true"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use pokedex::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), pokedex::PokedexError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod imaging;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, Screen, SearchFocus};
pub use catalog::{CatalogClient, Repository};
pub use domain::{PokedexError, Result};
pub use ui::Theme;

use app::list::DEFAULT_PAGE_SIZE;
use catalog::DEFAULT_BASE_URL;
use std::collections::BTreeMap;

/// Plugin configuration, parsed from the Zellij layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog API root.
    pub base_url: String,

    /// Entries requested per list page.
    pub page_size: u32,

    /// Fetch sprites and compute row swatches.
    pub load_sprites: bool,

    /// Built-in theme name.
    pub theme_name: Option<String>,

    /// Custom theme TOML path. Wins over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `debug` or `pokedex=trace`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            load_sprites: true,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the Zellij configuration map. Missing or invalid values fall
    /// back to their defaults.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let base_url = config
            .get("base_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.base_url);

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.page_size);

        let load_sprites = config
            .get("load_sprites")
            .and_then(|s| parse_flag(s))
            .unwrap_or(defaults.load_sprites);

        Self {
            base_url,
            page_size,
            load_sprites,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn load_theme(config: &Config) -> Theme {
    if let Some(file) = &config.theme_file {
        let path = infrastructure::expand_tilde(file);
        match Theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => tracing::warn!(theme_file = %file, error = %e, "failed to load theme file, using default"),
        }
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Builds the application state from configuration.
///
/// An unparseable `base_url` is logged and replaced by the public PokéAPI.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.base_url, page_size = config.page_size, "initializing pokedex plugin");

    let client = CatalogClient::new(&config.base_url).unwrap_or_else(|e| {
        tracing::warn!(base_url = %config.base_url, error = %e, "invalid base_url, using default");
        CatalogClient::default()
    });

    let mut state = AppState::new(Repository::new(client), config.page_size, load_theme(config));
    state.load_sprites = config.load_sprites;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("base_url", "http://localhost:8000/api/v2/"),
            ("page_size", "50"),
            ("load_sprites", "off"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.base_url, "http://localhost:8000/api/v2/");
        assert_eq!(config.page_size, 50);
        assert!(!config.load_sprites);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("base_url", "  "),
            ("page_size", "0"),
            ("load_sprites", "maybe"),
        ]));

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.load_sprites);

        let config = Config::from_zellij(&map(&[("page_size", "-3")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn initialize_applies_configuration() {
        let config = Config {
            page_size: 5,
            load_sprites: false,
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.list.page_size(), 5);
        assert!(!state.load_sprites);
        assert_eq!(state.theme.name, "catppuccin-frappe");
    }

    #[test]
    fn invalid_base_url_falls_back_to_default_client() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.repository.client(), &CatalogClient::default());
    }

    #[test]
    fn theme_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let latte = toml::to_string(&Theme::from_name("catppuccin-latte").unwrap()).unwrap();
        file.write_all(latte.replace("catppuccin-latte", "custom").as_bytes())
            .unwrap();

        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "custom");

        let missing = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&missing).theme, Theme::default());
    }
}
