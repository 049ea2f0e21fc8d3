//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

use crate::domain::Rgb;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub enum UIViewModel {
    List(ListViewModel),
    Detail(DetailViewModel),
}

/// The paged, searchable list screen.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    /// Rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// Shown instead of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Present while in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Pagination status under the table.
    pub status: Option<StatusLine>,
}

/// Display information for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Zero-padded dex number, e.g. `#025`.
    pub number_label: String,

    pub name: String,

    /// Dominant sprite color once the worker has reported it.
    pub swatch: Option<Rgb>,

    pub is_selected: bool,

    /// Character ranges of `name` matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No matches").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// Render the message with the error color.
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently edit the query.
    pub is_typing: bool,
}

/// Pagination status shown below the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Loading,
    Error(String),
    EndReached,
}

impl StatusLine {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Loading => "Loading more...".to_string(),
            Self::Error(message) => format!("{message}  (r: retry)"),
            Self::EndReached => "End of the Pokédex".to_string(),
        }
    }
}

/// The detail screen for one entry.
#[derive(Debug, Clone)]
pub struct DetailViewModel {
    pub header: HeaderInfo,
    /// Header background, from the navigation route.
    pub accent: Rgb,
    pub footer: FooterInfo,
    pub body: DetailBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    Loading,
    Error { message: String },
    Loaded(DetailCard),
}

/// Display-ready detail record.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    /// `#25 Pikachu`
    pub heading: String,
    pub types: Vec<TypeBadge>,
    /// `6.0 kg`
    pub weight: String,
    /// `0.4 m`
    pub height: String,
    pub stats: Vec<StatBar>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBadge {
    pub label: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    /// Abbreviated stat name (`HP`, `SpAtk`, ...).
    pub label: String,
    pub value: u32,
    /// Bar length relative to the strongest stat, in `0.0..=1.0`.
    pub ratio: f32,
    pub color: Rgb,
}
