//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin. It owns the list
//! controller, the detail controller while the detail screen is open, the
//! selection, the search input, and the dominant colors reported by the
//! worker. Only the event handler mutates it.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns the state into a renderable snapshot, handling
//! list windowing, match highlighting, pagination status, and the detail card.

use super::detail::DetailController;
use super::list::ListController;
use super::modes::{DetailRoute, InputMode, Screen, SearchFocus};
use crate::catalog::Repository;
use crate::domain::{DetailRecord, PokedexEntry, Resource, Rgb};
use crate::ui::palette::{stat_color, type_color};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailBody, DetailCard, DetailViewModel, DisplayItem, EmptyState, FooterInfo, HeaderInfo,
    ListViewModel, SearchBarInfo, StatBar, StatusLine, TypeBadge, UIViewModel,
};
use std::collections::HashMap;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Which screen is visible.
    pub screen: Screen,

    /// Pagination and search state.
    pub list: ListController,

    /// Present only while the detail screen is shown.
    pub detail: Option<DetailController>,

    /// Zero-based index into the displayed list. Clamped, never wraps.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Raw query as typed (untrimmed).
    pub search_query: String,

    /// Dominant sprite colors by dex number.
    pub colors: HashMap<u32, Rgb>,

    /// Whether sprites are fetched for color extraction.
    pub load_sprites: bool,

    /// Set when the user refused web access.
    pub permission_denied: bool,

    pub theme: Theme,

    pub repository: Repository,
}

impl AppState {
    /// Creates the initial state: list screen, nothing loaded yet.
    #[must_use]
    pub fn new(repository: Repository, page_size: u32, theme: Theme) -> Self {
        Self {
            screen: Screen::List,
            list: ListController::new(repository.clone(), page_size),
            detail: None,
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            colors: HashMap::new(),
            load_sprites: true,
            permission_denied: false,
            theme,
            repository,
        }
    }

    /// Moves the selection down by one row, stopping at the last row.
    pub fn move_selection_down(&mut self) {
        let len = self.list.displayed().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1).min(len - 1);
    }

    /// Moves the selection up by one row, stopping at the first row.
    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Keeps the selection inside the displayed list after it changed size.
    pub fn clamp_selection(&mut self) {
        let len = self.list.displayed().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&PokedexEntry> {
        self.list.displayed().get(self.selected_index)
    }

    /// Whether the selection sits on the last displayed row.
    #[must_use]
    pub fn at_last_row(&self) -> bool {
        let len = self.list.displayed().len();
        len > 0 && self.selected_index + 1 >= len
    }

    /// Builds the navigation route for the selected entry.
    #[must_use]
    pub fn selected_route(&self) -> Option<DetailRoute> {
        self.selected_entry()
            .map(|entry| DetailRoute::new(&entry.route_name(), self.colors.get(&entry.number).copied()))
    }

    /// Computes the view model for the visible screen.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        match &self.screen {
            Screen::List => UIViewModel::List(self.compute_list_viewmodel(rows)),
            Screen::Detail(route) => UIViewModel::Detail(self.compute_detail_viewmodel(route, cols)),
        }
    }

    fn compute_list_viewmodel(&self, rows: usize) -> ListViewModel {
        let displayed = self.list.displayed();

        if displayed.is_empty() {
            return ListViewModel {
                display_items: vec![],
                selected_index: 0,
                header: self.compute_list_header(),
                footer: self.compute_list_footer(),
                empty_state: self.compute_empty_state(),
                search_bar: self.compute_search_bar(),
                status: None,
            };
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(displayed.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && displayed.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = if matches!(self.input_mode, InputMode::Search(_)) && self.list.is_searching() {
            Some(self.search_query.as_str())
        } else {
            None
        };

        let display_items = displayed[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, entry)| self.compute_display_item(entry, visible_start + relative_idx, query))
            .collect();

        ListViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_list_header(),
            footer: self.compute_list_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            status: self.compute_status(),
        }
    }

    fn compute_display_item(&self, entry: &PokedexEntry, absolute_idx: usize, query: Option<&str>) -> DisplayItem {
        DisplayItem {
            number_label: format!("#{:03}", entry.number),
            name: entry.name.clone(),
            swatch: self.colors.get(&entry.number).copied(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges: query.map_or_else(Vec::new, |q| highlight_ranges(&entry.name, q)),
        }
    }

    fn compute_list_header(&self) -> HeaderInfo {
        let title = if self.list.is_searching() {
            format!(" Pokédex: {} matches ", self.list.displayed().len())
        } else {
            format!(" Pokédex ({}) ", self.list.displayed().len())
        };
        HeaderInfo { title }
    }

    fn compute_list_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter",
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: open"
            }
            InputMode::Normal => "j/k: navigate  /: search  Enter: open  r: retry  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    fn compute_status(&self) -> Option<StatusLine> {
        if self.list.is_loading() {
            Some(StatusLine::Loading)
        } else if let Some(message) = self.list.load_error() {
            Some(StatusLine::Error(message.to_string()))
        } else if self.list.end_reached() && !self.list.is_searching() {
            Some(StatusLine::EndReached)
        } else {
            None
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.permission_denied {
            return Some(EmptyState {
                message: "Web access was denied".to_string(),
                subtitle: "Grant the plugin web access to browse the Pokédex".to_string(),
                is_error: true,
            });
        }
        if self.list.is_searching() {
            return Some(EmptyState {
                message: "No matches".to_string(),
                subtitle: format!("Nothing loaded so far matches \"{}\"", self.search_query.trim()),
                is_error: false,
            });
        }
        if let Some(message) = self.list.load_error() {
            return Some(EmptyState {
                message: message.to_string(),
                subtitle: "Press r to retry".to_string(),
                is_error: true,
            });
        }
        if self.list.end_reached() {
            return Some(EmptyState {
                message: "The Pokédex is empty".to_string(),
                subtitle: "The catalog returned no entries".to_string(),
                is_error: false,
            });
        }
        Some(EmptyState {
            message: "Loading Pokédex...".to_string(),
            subtitle: "Fetching the first page".to_string(),
            is_error: false,
        })
    }

    /// Rows left for the table after header, borders, column headers, status
    /// line, and footer (plus the search box when visible).
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(10),
        }
    }

    fn compute_detail_viewmodel(&self, route: &DetailRoute, cols: usize) -> DetailViewModel {
        let body = match self.detail.as_ref().map(DetailController::resource) {
            None | Some(Resource::Loading) => DetailBody::Loading,
            Some(Resource::Error(message)) => DetailBody::Error {
                message: message.clone(),
            },
            Some(Resource::Success(record)) => DetailBody::Loaded(detail_card(record)),
        };

        let title = match &body {
            DetailBody::Loaded(card) => card.heading.clone(),
            _ => crate::domain::pokemon::title_case(&route.name),
        };
        let keybindings = if cols < 60 {
            "Esc: back  r: retry  q: quit"
        } else {
            "Esc/Backspace/h: back  r: retry  q: quit"
        };

        DetailViewModel {
            header: HeaderInfo {
                title: format!(" {title} "),
            },
            accent: route.color,
            footer: FooterInfo {
                keybindings: keybindings.to_string(),
            },
            body,
        }
    }
}

/// Builds the display card for a detail record.
#[must_use]
pub fn detail_card(record: &DetailRecord) -> DetailCard {
    let max = record.max_base_stat();
    DetailCard {
        heading: record.heading(),
        types: record
            .types
            .iter()
            .map(|slot| TypeBadge {
                label: slot.type_name.to_uppercase(),
                color: type_color(&slot.type_name),
            })
            .collect(),
        weight: format!("{:.1} kg", record.weight_kg()),
        height: format!("{:.1} m", record.height_m()),
        stats: record
            .stats
            .iter()
            .map(|stat| StatBar {
                label: stat.abbreviation().to_string(),
                value: stat.base_value,
                ratio: if max == 0 {
                    0.0
                } else {
                    stat.base_value as f32 / max as f32
                },
                color: stat_color(&stat.stat_name),
            })
            .collect(),
    }
}

/// Character range of the first case-insensitive occurrence of `query` in
/// `text`.
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![];
    }
    let haystack: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    if haystack.len() != text.chars().count() {
        return vec![];
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map_or_else(Vec::new, |start| vec![(start, start + needle.len())])
}
