//! Title bar.
//!
//! On the list screen the title is ` Pokédex (N) ` (or the match count while
//! searching) in the theme's header colors. On the detail screen it is the
//! entry heading drawn on the entry's dominant color.

use crate::domain::Rgb;
use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title bar. Returns the next free row.
///
/// An `accent` replaces the theme's header colors, with the text color picked
/// for contrast against it.
pub fn render_header(
    out: &mut String,
    row: usize,
    header: &HeaderInfo,
    accent: Option<Rgb>,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    match accent {
        Some(color) => {
            out.push_str(&Theme::bg_rgb(color));
            out.push_str(&Theme::fg_rgb(color.contrast_text()));
        }
        None => {
            out.push_str(&Theme::fg(&theme.colors.header_fg));
            if let Some(bg) = &theme.colors.header_bg {
                out.push_str(&Theme::bg(bg));
            }
        }
    }
    push_centered(out, &header.title, cols);
    out.push_str(Theme::reset());
    row + 1
}
