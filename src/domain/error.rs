//! Error types for the Pokédex plugin.
//!
//! This module defines the centralized error type [`PokedexError`] and a type alias
//! [`Result`] used throughout the crate. Errors never cross the repository boundary
//! as values: the repository collapses them into [`Resource::Error`] messages
//! before any controller sees them.
//!
//! [`Resource::Error`]: crate::domain::Resource::Error

use thiserror::Error;

/// Fallback message shown when a failure carries no description of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// The main error type for Pokédex plugin operations.
///
/// Transport and decode failures come from the catalog client, image errors
/// from sprite decoding on the worker thread, and the remaining variants from
/// configuration, theming, and IPC.
///
/// # Examples
///
/// ```
/// use pokedex::domain::PokedexError;
///
/// let err = PokedexError::Http { status: 404 };
/// assert_eq!(err.to_string(), "Request failed with HTTP status 404");
/// ```
#[derive(Debug, Error)]
pub enum PokedexError {
    /// The catalog answered with a non-success HTTP status.
    #[error("Request failed with HTTP status {status}")]
    Http {
        /// Status code reported by the host.
        status: u16,
    },

    /// A response body could not be decoded as the expected JSON document.
    #[error("Malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A catalog URL could not be parsed or extended.
    #[error("Invalid catalog URL: {0}")]
    Url(#[from] url::ParseError),

    /// A sprite could not be decoded into an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Catalog data was well-formed JSON but semantically unusable.
    ///
    /// Covers unknown request routing contexts and URLs that cannot carry a
    /// path.
    #[error("{0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PokedexError {
    /// Returns the human-readable description used for UI error messages.
    ///
    /// Falls back to [`FALLBACK_MESSAGE`] when the error renders to an empty
    /// string (for example `Catalog(String::new())`).
    #[must_use]
    pub fn describe(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// A specialized `Result` type for Pokédex operations.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_uses_display_text() {
        let err = PokedexError::Http { status: 503 };
        assert_eq!(err.describe(), "Request failed with HTTP status 503");
    }

    #[test]
    fn describe_falls_back_for_empty_messages() {
        let err = PokedexError::Catalog(String::new());
        assert_eq!(err.describe(), FALLBACK_MESSAGE);
    }

    #[test]
    fn decode_errors_convert_from_serde() {
        let err: PokedexError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, PokedexError::Decode(_)));
        assert!(err.describe().starts_with("Malformed catalog response"));
    }
}
