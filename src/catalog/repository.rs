//! Repository over the catalog client.
//!
//! The repository is the failure boundary: every decode or transport error is
//! converted into [`Resource::Error`] here and never travels further as an
//! error value.

use super::client::CatalogClient;
use super::requests::{CatalogRequest, CatalogResponse};
use super::responses::ListPayload;
use crate::domain::{DetailRecord, Resource};

/// Orchestrates catalog requests and wraps their outcomes in [`Resource`].
///
/// Request builders pass straight through to the client. The `get_*` methods
/// take the host's response for a previously built request and resolve it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    client: CatalogClient,
}

impl Repository {
    #[must_use]
    pub const fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub const fn client(&self) -> &CatalogClient {
        &self.client
    }

    #[must_use]
    pub fn list_request(&self, limit: u32, offset: u32) -> CatalogRequest {
        self.client.list_request(limit, offset)
    }

    #[must_use]
    pub fn detail_request(&self, name: &str) -> CatalogRequest {
        self.client.detail_request(name)
    }

    #[must_use]
    pub fn sprite_request(&self, number: u32) -> CatalogRequest {
        self.client.sprite_request(number)
    }

    /// Resolves a list page response.
    pub fn get_list(&self, response: &CatalogResponse) -> Resource<ListPayload> {
        let resource = Resource::from(self.client.decode_list(response));
        if let Resource::Error(message) = &resource {
            tracing::debug!(status = response.status, error = %message, "list page failed");
        }
        resource
    }

    /// Resolves a detail response.
    pub fn get_detail(&self, response: &CatalogResponse) -> Resource<DetailRecord> {
        let resource = Resource::from(self.client.decode_detail(response)).map(DetailRecord::from);
        if let Resource::Error(message) = &resource {
            tracing::debug!(status = response.status, error = %message, "detail fetch failed");
        }
        resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = include_str!("../../tests/fixtures/pikachu.json");
    const BULBASAUR: &str = include_str!("../../tests/fixtures/bulbasaur.json");

    #[test]
    fn detail_success_passes_through() {
        let repository = Repository::default();
        let resource = repository.get_detail(&CatalogResponse::new(200, PIKACHU.as_bytes().to_vec()));

        let record = resource.data().expect("pikachu fixture decodes");
        assert_eq!(record.id, 25);
        assert_eq!(record.types[0].type_name, "electric");
    }

    #[test]
    fn detail_types_are_not_reordered() {
        let repository = Repository::default();
        let body = BULBASAUR.as_bytes().to_vec();
        let resource = repository.get_detail(&CatalogResponse::new(200, body));

        let record = resource.data().expect("bulbasaur document decodes");
        let slots: Vec<(u32, &str)> = record
            .types
            .iter()
            .map(|t| (t.slot, t.type_name.as_str()))
            .collect();
        assert_eq!(slots, [(2, "poison"), (1, "grass")]);
    }

    #[test]
    fn transport_failures_become_error_messages() {
        let repository = Repository::default();
        let resource = repository.get_list(&CatalogResponse::new(500, vec![]));
        assert_eq!(resource, Resource::Error("Request failed with HTTP status 500".into()));
    }

    #[test]
    fn decode_failures_become_error_messages() {
        let repository = Repository::default();
        let resource = repository.get_detail(&CatalogResponse::new(200, b"{}".to_vec()));
        let message = resource.message().expect("empty object is not a detail document");
        assert!(message.starts_with("Malformed catalog response"));
    }

    #[test]
    fn empty_pages_are_successes() {
        let repository = Repository::default();
        let resource = repository.get_list(&CatalogResponse::new(200, br#"{"count":0,"results":[]}"#.to_vec()));
        assert_eq!(resource.data().map(|p| p.results.len()), Some(0));
    }
}
