//! Entry table: dex number, color swatch, and name.
//!
//! ```text
//!  NO.      NAME
//!  #001  ██ Bulbasaur
//!  #002  ██ Ivysaur
//! ```
//!
//! The swatch is drawn in the sprite's dominant color and left blank until the
//! worker reports one. Names are truncated to the remaining width; search
//! matches are highlighted except on the selected row, where the selection
//! colors win.

use crate::ui::helpers::{self, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const NUMBER_WIDTH: usize = 7;
const SWATCH: &str = "██";
const SWATCH_WIDTH: usize = 3;

pub fn render_table_headers(out: &mut String, row: usize, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&format!(" {:<w$}{:<s$}NAME", "NO.", "", w = NUMBER_WIDTH - 1, s = SWATCH_WIDTH));
    out.push_str(Theme::reset());
    row + 1
}

pub fn render_table_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_table_row(out, current, item, theme, cols))
}

fn row_colors(item: &DisplayItem, theme: &Theme) -> String {
    if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    }
}

fn render_table_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let colors = row_colors(item, theme);

    position_cursor(out, row, 1);
    out.push_str(&colors);
    out.push_str(&format!(" {:<w$}", item.number_label, w = NUMBER_WIDTH - 1));

    match item.swatch {
        Some(color) => {
            out.push_str(&Theme::fg_rgb(color));
            out.push_str(SWATCH);
            out.push_str(&colors);
            out.push(' ');
        }
        None => out.push_str(&" ".repeat(SWATCH_WIDTH)),
    }

    let name_width = cols.saturating_sub(NUMBER_WIDTH + SWATCH_WIDTH);
    let name = helpers::truncate(&item.name, name_width);
    helpers::render_highlighted_text(out, &name, &item.highlight_ranges, theme, item.is_selected);
    if !item.is_selected && !item.highlight_ranges.is_empty() {
        out.push_str(&colors);
    }
    out.push_str(&" ".repeat(name_width.saturating_sub(text_width(&name))));

    out.push_str(Theme::reset());
    row + 1
}
