//! Input modes and screen routing.
//!
//! # State Machine
//!
//! The list screen operates in one of two input modes:
//! - **Normal**: navigation and commands
//! - **Search**: typing a query, or navigating its results
//!
//! The [`Screen`] decides which of the two screens is shown. Opening an entry
//! pushes a [`DetailRoute`]; going back pops it and leaves the list, its
//! selection, and its search untouched.

use crate::domain::Rgb;

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the query. Enter moves focus to the results.
    Typing,

    /// Keys move through the results. `/` returns to the query.
    Navigating,
}

/// Current input handling mode on the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// j/k (navigate), / (search), enter (open), r (retry), q (quit).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// Navigation payload for the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRoute {
    /// Lower-cased catalog name.
    pub name: String,
    /// Accent color: the entry's dominant color, white when unknown.
    pub color: Rgb,
}

impl DetailRoute {
    /// Builds a route from a display name and an optional dominant color.
    #[must_use]
    pub fn new(name: &str, color: Option<Rgb>) -> Self {
        Self {
            name: name.to_lowercase(),
            color: color.unwrap_or(Rgb::WHITE),
        }
    }
}

/// Which screen is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail(DetailRoute),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_falls_back_to_white() {
        let route = DetailRoute::new("Pikachu", None);
        assert_eq!(route.name, "pikachu");
        assert_eq!(route.color, Rgb::WHITE);
        assert_eq!(route.color.to_int(), 0x00ff_ffff);
    }
}
