//! Three-line search box.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const MARGIN: usize = 5;

/// Renders the search box. The border uses the accent color only while the
/// query is being edited.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner = cols.saturating_sub(MARGIN * 2).saturating_sub(2);
    let border = if search.is_typing {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(MARGIN));
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner)));
    out.push_str(Theme::reset());

    let cursor = if search.is_typing { "▏" } else { "" };
    let text = truncate(&format!(" Search: {}{cursor}", search.query), inner);

    position_cursor(out, row + 1, 1);
    out.push_str(&" ".repeat(MARGIN));
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&text);
    out.push_str(&" ".repeat(inner.saturating_sub(text_width(&text))));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&" ".repeat(MARGIN));
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner)));
    out.push_str(Theme::reset());

    row + 3
}
