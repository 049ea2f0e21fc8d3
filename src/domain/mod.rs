//! Domain layer for the Pokédex plugin.
//!
//! Core types independent of Zellij APIs and of the catalog's wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`resource`]: The Loading / Success / Error fetch outcome
//! - [`pokemon`]: List entries and detail records
//! - [`color`]: RGB color values

pub mod color;
pub mod error;
pub mod pokemon;
pub mod resource;

pub use color::Rgb;
pub use error::{PokedexError, Result};
pub use pokemon::{BaseStat, DetailRecord, PokedexEntry, TypeSlot};
pub use resource::Resource;
