//! Screen layouts assembled from component renderers.
//!
//! List screen:
//!
//! ```text
//! [blank]
//! [header]
//! [border]
//! [search box, 3 rows, search mode only]
//! [column headers]
//! [rows...]
//! [status line]
//! [border]
//! [footer]
//! ```
//!
//! The detail screen shares the header, border, and footer rows and fills the
//! middle with the entry card:
//!
//! ```text
//! [blank]
//! [header, tinted with the entry color]
//! [border]
//! [type badges]
//! [weight / height]
//! [Base stats]
//! [one bar per stat...]
//! [border]
//! [footer]
//! ```
//!
//! # Components
//!
//! - `header`: centered title bar, optionally accent-tinted
//! - `footer`: keybinding hints
//! - `search`: three-row search box with a typing cursor
//! - `table`: column headers and entry rows with swatches and highlights
//! - `status`: loading / error / end-of-list line
//! - `empty`: centered placeholder message
//! - `detail`: type badges, measurements, and stat bars
//!
//! # Line accounting
//!
//! The list screen reserves 7 rows of chrome (blank, header, border, column
//! headers, status, border, footer), 10 in search mode. The table window
//! computed in `AppState::compute_viewmodel` uses the same numbers, so the
//! rows always fit between the column headers and the status line.
//!
//! Every component writes into a caller-owned `String` and returns the next
//! free row where the layout continues below it.

mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod status;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailViewModel, FooterInfo, ListViewModel};

use detail::render_detail_body;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use status::render_status;
use table::{render_table_headers, render_table_rows};

const FIRST_ROW: usize = 2;

fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Border and footer on the last two rows.
fn render_bottom(out: &mut String, footer: &FooterInfo, theme: &Theme, rows: usize, cols: usize) {
    let footer_row = rows.max(FIRST_ROW + 2);
    render_border(out, footer_row - 1, &theme.colors.border, cols);
    render_footer(out, footer_row, footer, theme, cols);
}

/// Renders the list screen: header, optional search box, then either the
/// table with its status line or the empty-state message.
pub fn render_list_screen(out: &mut String, vm: &ListViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut row = render_header(out, FIRST_ROW, &vm.header, None, theme, cols);
    row = render_border(out, row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        row = render_search_bar(out, row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, row + 2, empty, theme, cols);
    } else {
        row = render_table_headers(out, row, theme);
        render_table_rows(out, row, &vm.display_items, theme, cols);
        if let Some(status) = &vm.status {
            render_status(out, rows.saturating_sub(2).max(row), status, theme, cols);
        }
    }

    render_bottom(out, &vm.footer, theme, rows, cols);
}

/// Renders the detail screen for one entry.
pub fn render_detail_screen(out: &mut String, vm: &DetailViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut row = render_header(out, FIRST_ROW, &vm.header, Some(vm.accent), theme, cols);
    row = render_border(out, row, &theme.colors.border, cols);
    render_detail_body(out, row, &vm.body, theme, cols);
    render_bottom(out, &vm.footer, theme, rows, cols);
}
