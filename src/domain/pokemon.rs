//! Pokémon domain models.
//!
//! [`PokedexEntry`] is the list-row summary derived from a catalog list item;
//! [`DetailRecord`] is the full record behind the detail screen. Both are
//! immutable once built.

use serde::{Deserialize, Serialize};

/// Base URL of the sprite repository; the entry number and `.png` are appended.
pub const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/";

/// A single row of the Pokédex list.
///
/// # Fields
///
/// - `name`: display name, first letter upper-cased
/// - `image_url`: sprite URL composed from [`SPRITE_BASE_URL`]
/// - `number`: national dex number extracted from the catalog URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexEntry {
    pub name: String,
    pub image_url: String,
    pub number: u32,
}

impl PokedexEntry {
    /// Builds an entry from a catalog list item.
    ///
    /// Returns `None` when the resource URL does not end in a number, which
    /// the catalog never produces for valid entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokedex::domain::PokedexEntry;
    ///
    /// let entry = PokedexEntry::from_list_item("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/").unwrap();
    /// assert_eq!(entry.name, "Ivysaur");
    /// assert_eq!(entry.number, 2);
    /// assert!(entry.image_url.ends_with("/pokemon/2.png"));
    /// ```
    #[must_use]
    pub fn from_list_item(name: &str, url: &str) -> Option<Self> {
        let number = entry_number(url)?;
        Some(Self {
            name: title_case(name),
            image_url: sprite_url(number),
            number,
        })
    }

    /// Catalog key for the detail endpoint (the lower-cased name).
    #[must_use]
    pub fn route_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns `true` if the entry matches a search query.
    ///
    /// The query is trimmed; an entry matches when its name contains the query
    /// case-insensitively or its number equals the query parsed as an integer.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.to_lowercase().contains(&query.to_lowercase())
            || query.parse::<u32>().is_ok_and(|n| n == self.number)
    }
}

/// Extracts the trailing number of a catalog resource URL.
///
/// One trailing `/` is stripped before the trailing run of ASCII digits is
/// read.
///
/// # Examples
///
/// ```
/// use pokedex::domain::pokemon::entry_number;
///
/// assert_eq!(entry_number("https://pokeapi.co/api/v2/pokemon/3/"), Some(3));
/// assert_eq!(entry_number("https://pokeapi.co/api/v2/pokemon/25"), Some(25));
/// assert_eq!(entry_number("https://pokeapi.co/api/v2/pokemon/"), None);
/// ```
#[must_use]
pub fn entry_number(url: &str) -> Option<u32> {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    let digit_count = trimmed
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .count();
    trimmed[trimmed.len() - digit_count..].parse().ok()
}

/// Returns the sprite URL for a dex number.
#[must_use]
pub fn sprite_url(number: u32) -> String {
    format!("{SPRITE_BASE_URL}{number}.png")
}

/// Upper-cases the first character and leaves the rest untouched.
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// One of a Pokémon's elemental types, in the catalog's slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    pub type_name: String,
}

/// A base stat value such as `hp` or `special-attack`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStat {
    pub stat_name: String,
    pub base_value: u32,
}

impl BaseStat {
    /// Short label used on the stat bars.
    #[must_use]
    pub fn abbreviation(&self) -> &str {
        match self.stat_name.as_str() {
            "hp" => "HP",
            "attack" => "Atk",
            "defense" => "Def",
            "special-attack" => "SpAtk",
            "special-defense" => "SpDef",
            "speed" => "Spd",
            other => other,
        }
    }
}

/// Full record behind the detail screen.
///
/// `height` is in decimetres and `weight` in hectograms, as the catalog
/// reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<BaseStat>,
    pub sprite_url: String,
}

impl DetailRecord {
    #[must_use]
    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    #[must_use]
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    /// Largest base stat, used to scale the stat bars. Zero when there are no
    /// stats.
    #[must_use]
    pub fn max_base_stat(&self) -> u32 {
        self.stats.iter().map(|s| s.base_value).max().unwrap_or(0)
    }

    /// `#25 Pikachu` style heading.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("#{} {}", self.id, title_case(&self.name))
    }
}
