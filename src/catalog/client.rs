//! Remote catalog client.
//!
//! Builds PokéAPI requests against a configurable base URL and decodes the
//! JSON bodies the host returns. The client never performs I/O itself; the
//! plugin shim executes each [`CatalogRequest`] through Zellij's
//! `web_request` and feeds the [`CatalogResponse`] back for decoding.

use super::requests::{CatalogRequest, CatalogResponse, RequestKind};
use super::responses::{DetailPayload, ListPayload};
use crate::domain::error::{PokedexError, Result};
use crate::domain::pokemon::sprite_url;
use url::Url;

/// Default catalog root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Request builder and response decoder for the PokéAPI.
///
/// # Example
///
/// ```
/// use pokedex::catalog::CatalogClient;
///
/// let client = CatalogClient::new("https://pokeapi.co/api/v2").unwrap();
/// let request = client.list_request(20, 40);
/// assert_eq!(request.url, "https://pokeapi.co/api/v2/pokemon?limit=20&offset=40");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogClient {
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// A missing trailing slash is added so relative joins stay under the
    /// versioned API path.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or cannot carry a path
    /// (e.g. `mailto:`).
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(PokedexError::Config(format!("catalog URL cannot carry a path: {base_url}")));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET {base}/pokemon?limit={limit}&offset={offset}`
    #[must_use]
    pub fn list_request(&self, limit: u32, offset: u32) -> CatalogRequest {
        let mut url = self.endpoint(&["pokemon"]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());

        CatalogRequest {
            kind: RequestKind::List { limit, offset },
            url: url.into(),
        }
    }

    /// `GET {base}/pokemon/{name}` with the name lower-cased.
    #[must_use]
    pub fn detail_request(&self, name: &str) -> CatalogRequest {
        let name = name.trim().to_lowercase();
        let url = self.endpoint(&["pokemon", &name]);

        CatalogRequest {
            kind: RequestKind::Detail { name },
            url: url.into(),
        }
    }

    /// Sprite PNG for a dex number. Sprites live outside the catalog root.
    #[must_use]
    pub fn sprite_request(&self, number: u32) -> CatalogRequest {
        CatalogRequest {
            kind: RequestKind::Sprite { number },
            url: sprite_url(number),
        }
    }

    /// Decodes a list page.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::Http`] for non-2xx responses and
    /// [`PokedexError::Decode`] for malformed bodies.
    pub fn decode_list(&self, response: &CatalogResponse) -> Result<ListPayload> {
        let body = response.success_body()?;
        Ok(serde_json::from_slice(body)?)
    }

    /// Decodes a detail document.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::Http`] for non-2xx responses and
    /// [`PokedexError::Decode`] for malformed bodies.
    pub fn decode_detail(&self, response: &CatalogResponse) -> Result<DetailPayload> {
        let body = response.success_body()?;
        Ok(serde_json::from_slice(body)?)
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("Built-in catalog URL should always parse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_targets_pokemon_endpoint() {
        let client = CatalogClient::default();
        let request = client.list_request(20, 0);
        assert_eq!(request.url, "https://pokeapi.co/api/v2/pokemon?limit=20&offset=0");
        assert_eq!(request.kind, RequestKind::List { limit: 20, offset: 0 });
    }

    #[test]
    fn detail_request_lowercases_name() {
        let client = CatalogClient::new("http://localhost:8080/api/v2/").unwrap();
        let request = client.detail_request("Pikachu");
        assert_eq!(request.url, "http://localhost:8080/api/v2/pokemon/pikachu");
        assert_eq!(request.kind, RequestKind::Detail { name: "pikachu".into() });
    }

    #[test]
    fn sprite_request_uses_sprite_host() {
        let request = CatalogClient::default().sprite_request(6);
        assert_eq!(
            request.url,
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/6.png"
        );
    }

    #[test]
    fn invalid_base_urls_are_rejected() {
        assert!(matches!(CatalogClient::new("not a url"), Err(PokedexError::Url(_))));
        assert!(matches!(CatalogClient::new("mailto:ash@example.com"), Err(PokedexError::Config(_))));
    }

    #[test]
    fn decode_list_reads_count_and_results() {
        let body = br#"{"count":1302,"next":null,"previous":null,"results":[{"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon/1/"}]}"#;
        let payload = CatalogClient::default()
            .decode_list(&CatalogResponse::new(200, body.to_vec()))
            .unwrap();
        assert_eq!(payload.count, 1302);
        assert_eq!(payload.results[0].name, "bulbasaur");
    }

    #[test]
    fn decode_list_reports_bad_json() {
        let result = CatalogClient::default().decode_list(&CatalogResponse::new(200, b"<html>".to_vec()));
        assert!(matches!(result, Err(PokedexError::Decode(_))));
    }
}
