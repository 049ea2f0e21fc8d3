//! Fixed colors for elemental types and base stats.
//!
//! These are content colors, identical across themes.

use crate::domain::Rgb;

/// Badge color for an elemental type. Unknown types render gray.
#[must_use]
pub fn type_color(type_name: &str) -> Rgb {
    let hex = match type_name {
        "normal" => 0xA8_A77A,
        "fire" => 0xEE_8130,
        "water" => 0x63_90F0,
        "electric" => 0xF7_D02C,
        "grass" => 0x7A_C74C,
        "ice" => 0x96_D9D6,
        "fighting" => 0xC2_2E28,
        "poison" => 0xA3_3EA1,
        "ground" => 0xE2_BF65,
        "flying" => 0xA9_8FF3,
        "psychic" => 0xF9_5587,
        "bug" => 0xA6_B91A,
        "rock" => 0xB6_A136,
        "ghost" => 0x73_5797,
        "dragon" => 0x6F_35FC,
        "dark" => 0x70_5746,
        "steel" => 0xB7_B7CE,
        "fairy" => 0xD6_85AD,
        _ => 0x77_7777,
    };
    Rgb::from_int(hex)
}

/// Bar color for a base stat.
#[must_use]
pub fn stat_color(stat_name: &str) -> Rgb {
    let hex = match stat_name {
        "hp" => 0xF5_FF00,
        "attack" => 0x9E_2A22,
        "defense" => 0x00_00FF,
        "special-attack" => 0x71_C558,
        "special-defense" => 0xEA_5D60,
        "speed" => 0xCC_CCCC,
        _ => 0xFF_FFFF,
    };
    Rgb::from_int(hex)
}
