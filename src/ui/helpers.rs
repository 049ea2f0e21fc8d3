//! Shared rendering utilities.
//!
//! Components append to a frame buffer instead of printing directly, so a
//! whole frame can be assembled, inspected in tests, and written once.

use crate::ui::theme::Theme;

/// Moves the cursor to `row`/`col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Display width in terminal columns, counting one column per character.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `width` characters.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Appends `text` centered in a line of `cols` columns, padding both sides.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let width = text_width(&text);
    let left = cols.saturating_sub(width) / 2;
    out.push_str(&" ".repeat(left));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(left + width)));
}

/// Appends text with highlighted character ranges.
///
/// Ranges are `(start, end)` character indices, end exclusive. Out-of-bounds
/// ranges are clamped. Selected rows skip highlighting so the selection colors
/// stay intact.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut cursor = 0;

    for &(start, end) in ranges {
        let start = start.clamp(cursor, chars.len());
        let end = end.clamp(start, chars.len());

        out.extend(&chars[cursor..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        cursor = end;
    }

    out.extend(&chars[cursor..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut in_escape = false;
        for c in text.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, c) if c.is_ascii_alphabetic() => in_escape = false,
                (true, _) => {}
                (false, c) => plain.push(c),
            }
        }
        plain
    }

    #[test]
    fn highlighting_preserves_text() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "pikachu", &[(2, 4)], &theme, false);

        assert_eq!(strip_ansi(&out), "pikachu");
        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn out_of_range_highlight_is_clamped() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "mew", &[(1, 40)], &theme, false);
        assert_eq!(strip_ansi(&out), "mew");
    }

    #[test]
    fn selected_rows_are_plain() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "eevee", &[(0, 2)], &theme, true);
        assert_eq!(out, "eevee");
    }

    #[test]
    fn centering_counts_characters() {
        let mut out = String::new();
        push_centered(&mut out, "Pokédex", 11);
        assert_eq!(out, "  Pokédex  ");
    }
}
