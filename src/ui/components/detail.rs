//! Detail screen body: type badges, measurements, and base stat bars.
//!
//! Bars are scaled to the entry's strongest stat, which fills the full width.
//! Any non-zero stat gets at least one filled cell. The unfilled remainder is
//! drawn in the theme's `stat_track` color.

use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailBody, DetailCard, EmptyState, StatBar};

use super::empty::render_empty_state;

const INDENT: usize = 2;
const STAT_LABEL_WIDTH: usize = 6;
const STAT_VALUE_WIDTH: usize = 4;
const BAR_FILL: &str = "█";
const BAR_TRACK: &str = "░";

/// Renders the detail body starting at `row`. Returns the next free row.
pub fn render_detail_body(out: &mut String, row: usize, body: &DetailBody, theme: &Theme, cols: usize) -> usize {
    match body {
        DetailBody::Loading => {
            position_cursor(out, row + 1, 1);
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            push_centered(out, "Loading...", cols);
            out.push_str(Theme::reset());
            row + 2
        }
        DetailBody::Error { message } => {
            let empty = EmptyState {
                message: message.clone(),
                subtitle: "Press r to retry".to_string(),
                is_error: true,
            };
            render_empty_state(out, row + 1, &empty, theme, cols);
            row + 3
        }
        DetailBody::Loaded(card) => render_card(out, row, card, theme, cols),
    }
}

fn render_card(out: &mut String, row: usize, card: &DetailCard, theme: &Theme, cols: usize) -> usize {
    let mut row = row + 1;

    position_cursor(out, row, INDENT + 1);
    for badge in &card.types {
        out.push_str(Theme::bold());
        out.push_str(&Theme::bg_rgb(badge.color));
        out.push_str(&Theme::fg_rgb(badge.color.contrast_text()));
        out.push_str(&format!(" {} ", badge.label));
        out.push_str(Theme::reset());
        out.push(' ');
    }
    row += 2;

    position_cursor(out, row, INDENT + 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str("Weight ");
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&format!("{:<12}", card.weight));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str("Height ");
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&card.height);
    out.push_str(Theme::reset());
    row += 2;

    position_cursor(out, row, INDENT + 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str("Base stats");
    out.push_str(Theme::reset());
    row += 1;

    let bar_width = cols.saturating_sub(INDENT * 2 + STAT_LABEL_WIDTH + STAT_VALUE_WIDTH + 1);
    for stat in &card.stats {
        render_stat(out, row, stat, bar_width, theme);
        row += 1;
    }
    row
}

fn render_stat(out: &mut String, row: usize, stat: &StatBar, bar_width: usize, theme: &Theme) {
    position_cursor(out, row, INDENT + 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!("{:<w$}", stat.label, w = STAT_LABEL_WIDTH));
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&format!("{:>w$} ", stat.value, w = STAT_VALUE_WIDTH));

    let filled = bar_fill(stat.ratio, bar_width);
    out.push_str(&Theme::fg_rgb(stat.color));
    out.push_str(&BAR_FILL.repeat(filled));
    out.push_str(&Theme::fg(&theme.colors.stat_track));
    out.push_str(&BAR_TRACK.repeat(bar_width - filled));
    out.push_str(Theme::reset());
}

/// Cells to fill for `ratio`; a non-zero stat always gets at least one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn bar_fill(ratio: f32, width: usize) -> usize {
    if width == 0 || ratio <= 0.0 {
        return 0;
    }
    let cells = (ratio.min(1.0) * width as f32).round() as usize;
    cells.clamp(1, width)
}
