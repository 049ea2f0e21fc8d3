//! Color schemes and ANSI escape sequence generation.
//!
//! Built-in themes are the four Catppuccin flavors, compiled in from
//! `themes/*.toml`. Custom themes use the same TOML layout:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! stat_track = "#313244"
//! ```

use crate::domain::{PokedexError, Result, Rgb};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, status line, and secondary labels.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,
    pub error_fg: String,

    /// Unfilled part of the detail screen's stat bars.
    pub stat_track: String,
}

impl Theme {
    /// Looks up a built-in theme.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };
        toml::from_str(source).ok()
    }

    /// Loads a custom theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::Theme`] when the file is unreadable or not a
    /// valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| PokedexError::Theme(format!("{}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| PokedexError::Theme(format!("{}: {e}", path.display())))
    }

    /// Parses `#rrggbb` (with or without `#`). Malformed input yields white.
    #[must_use]
    pub fn parse_hex(hex: &str) -> Rgb {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Rgb::WHITE;
        }
        u32::from_str_radix(digits, 16).map_or(Rgb::WHITE, Rgb::from_int)
    }

    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::fg_rgb(Self::parse_hex(hex))
    }

    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::bg_rgb(Self::parse_hex(hex))
    }

    /// 24-bit foreground escape for an already-parsed color.
    #[must_use]
    pub fn fg_rgb(color: Rgb) -> String {
        format!("\u{001b}[38;2;{};{};{}m", color.r, color.g, color.b)
    }

    /// 24-bit background escape for an already-parsed color.
    #[must_use]
    pub fn bg_rgb(color: Rgb) -> String {
        format!("\u{001b}[48;2;{};{};{}m", color.r, color.g, color.b)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in theme fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Theme::parse_hex("#f38ba8"), Rgb::new(0xf3, 0x8b, 0xa8));
        assert_eq!(Theme::parse_hex("000000"), Rgb::new(0, 0, 0));
        assert_eq!(Theme::parse_hex("#fff"), Rgb::WHITE);
        assert_eq!(Theme::parse_hex("#zzzzzz"), Rgb::WHITE);
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg("#010203"), "\u{001b}[38;2;1;2;3m");
        assert_eq!(Theme::bg_rgb(Rgb::new(255, 0, 16)), "\u{001b}[48;2;255;0;16m");
    }

    #[test]
    fn custom_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mocha = toml::to_string(&Theme::default()).unwrap();
        file.write_all(mocha.replace("catppuccin-mocha", "mine").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
        assert_eq!(theme.colors, Theme::default().colors);
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PokedexError::Theme(_)));
    }
}
