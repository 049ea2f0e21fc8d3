//! Pagination status line between the table and the bottom border.
//!
//! - `Loading more...` while a page is in flight
//! - the error message with a retry hint after a failed page
//! - `End of the Pokédex` once every page has been fetched

use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

/// Renders the pagination status line. Errors use the error color.
pub fn render_status(out: &mut String, row: usize, status: &StatusLine, theme: &Theme, cols: usize) {
    position_cursor(out, row, 1);
    match status {
        StatusLine::Error(_) => out.push_str(&Theme::fg(&theme.colors.error_fg)),
        StatusLine::Loading | StatusLine::EndReached => {
            out.push_str(Theme::dim());
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
    }
    push_centered(out, &status.text(), cols);
    out.push_str(Theme::reset());
}
