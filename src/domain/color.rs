//! 24-bit color value shared by the imaging layer, navigation, and rendering.

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Plain white, the accent used when no dominant color is known.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color into a `0xRRGGBB` integer, the form carried by the
    /// detail route.
    #[must_use]
    pub const fn to_int(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks a `0xRRGGBB` (or `0xAARRGGBB`) integer; alpha is ignored.
    #[must_use]
    pub const fn from_int(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Formats the color as `#rrggbb`, the notation used by themes.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Picks black or white text for legible contrast on this background.
    #[must_use]
    pub fn contrast_text(self) -> Self {
        let luma = 299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        if luma > 150_000 {
            Self::new(0, 0, 0)
        } else {
            Self::WHITE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_packing_matches_android_color_ints() {
        let color = Rgb::new(0x12, 0xab, 0xef);
        assert_eq!(color.to_int(), 0x0012_abef);
        assert_eq!(Rgb::from_int(0xff12_abef), color);
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(1, 2, 255).to_hex(), "#0102ff");
    }

    #[test]
    fn contrast_text_flips_on_light_backgrounds() {
        assert_eq!(Rgb::WHITE.contrast_text(), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::new(20, 20, 60).contrast_text(), Rgb::WHITE);
    }
}
