//! Centered placeholder shown instead of the table.
//!
//! Used for the first load, an empty catalog, a search with no matches, a
//! failed first page, and denied web access. Failures use the theme's
//! `error_fg`; everything else uses `empty_state_fg`.

use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    push_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());
}
