//! Wire types for the PokéAPI JSON documents.
//!
//! Only the fields the plugin reads are modelled; serde ignores the rest of
//! the (large) detail document.

use crate::domain::{BaseStat, DetailRecord, PokedexEntry, TypeSlot};
use serde::Deserialize;

/// `GET /pokemon?limit&offset` body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListPayload {
    /// Total number of entries the catalog reports.
    pub count: u32,
    pub results: Vec<NamedResource>,
}

impl ListPayload {
    /// Converts the raw results into list entries, skipping (and logging) any
    /// entry whose URL carries no dex number.
    #[must_use]
    pub fn entries(&self) -> Vec<PokedexEntry> {
        self.results
            .iter()
            .filter_map(|item| {
                let entry = PokedexEntry::from_list_item(&item.name, &item.url);
                if entry.is_none() {
                    tracing::warn!(name = %item.name, url = %item.url, "skipping list entry without a dex number");
                }
                entry
            })
            .collect()
    }
}

/// `{name, url}` pair used throughout the catalog for links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// `GET /pokemon/{name}` body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DetailPayload {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeEntry>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeEntry {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

impl From<DetailPayload> for DetailRecord {
    fn from(payload: DetailPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            height: payload.height,
            weight: payload.weight,
            types: payload
                .types
                .into_iter()
                .map(|t| TypeSlot {
                    slot: t.slot,
                    type_name: t.kind.name,
                })
                .collect(),
            stats: payload
                .stats
                .into_iter()
                .map(|s| BaseStat {
                    stat_name: s.stat.name,
                    base_value: s.base_stat,
                })
                .collect(),
            sprite_url: payload.sprites.front_default.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = include_str!("../../tests/fixtures/pikachu.json");
    // type slots listed out of order (2, 1)
    const BULBASAUR: &str = include_str!("../../tests/fixtures/bulbasaur.json");

    #[test]
    fn detail_payload_keeps_api_order() {
        let payload: DetailPayload = serde_json::from_str(PIKACHU).unwrap();
        let record = DetailRecord::from(payload);

        assert_eq!(record.id, 25);
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.types.len(), 1);
        assert_eq!(record.types[0].type_name, "electric");
        let names: Vec<&str> = record.stats.iter().map(|s| s.stat_name.as_str()).collect();
        assert_eq!(
            names,
            ["hp", "attack", "defense", "special-attack", "special-defense", "speed"]
        );
        assert!(record.sprite_url.ends_with("/25.png"));
    }

    #[test]
    fn detail_types_keep_response_order() {
        let payload: DetailPayload = serde_json::from_str(BULBASAUR).unwrap();
        let record = DetailRecord::from(payload);

        assert_eq!(
            record.types,
            vec![
                TypeSlot { slot: 2, type_name: "poison".to_string() },
                TypeSlot { slot: 1, type_name: "grass".to_string() },
            ]
        );
    }

    #[test]
    fn null_sprite_becomes_empty_url() {
        let json = r#"{"id":1,"name":"x","height":1,"weight":1,"types":[],"stats":[],"sprites":{"front_default":null}}"#;
        let record = DetailRecord::from(serde_json::from_str::<DetailPayload>(json).unwrap());
        assert_eq!(record.sprite_url, "");
    }

    #[test]
    fn list_entries_skip_unnumbered_urls() {
        let payload = ListPayload {
            count: 2,
            results: vec![
                NamedResource { name: "bulbasaur".into(), url: "https://pokeapi.co/api/v2/pokemon/1/".into() },
                NamedResource { name: "glitch".into(), url: "https://pokeapi.co/api/v2/pokemon/".into() },
            ],
        };
        let entries = payload.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Bulbasaur");
    }
}
