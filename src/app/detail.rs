//! Detail screen controller.
//!
//! A [`DetailController`] exists only while the detail screen is open. It
//! holds the lower-cased name it was opened for and the [`Resource`] of the
//! single detail fetch. Nothing is cached: reopening the same entry fetches
//! again.

use crate::catalog::{CatalogRequest, CatalogResponse, Repository};
use crate::domain::{DetailRecord, Resource};

#[derive(Debug, Clone)]
pub struct DetailController {
    repository: Repository,
    name: String,
    resource: Resource<DetailRecord>,
}

impl DetailController {
    /// Opens the controller for `name` and returns the request to issue.
    #[must_use]
    pub fn open(repository: Repository, name: &str) -> (Self, CatalogRequest) {
        let request = repository.detail_request(name);
        let name = name.trim().to_lowercase();
        tracing::debug!(name = %name, "opening detail");

        let controller = Self {
            repository,
            name,
            resource: Resource::Loading,
        };
        (controller, request)
    }

    /// Resolves the detail response for `name`.
    ///
    /// Returns `false` (and leaves the state untouched) when the response was
    /// requested for a different entry.
    pub fn on_response(&mut self, name: &str, response: &CatalogResponse) -> bool {
        if name != self.name {
            tracing::debug!(expected = %self.name, got = %name, "dropping detail for another entry");
            return false;
        }
        self.resource = self.repository.get_detail(response);
        true
    }

    /// Re-issues the detail request and resets the state to `Loading`.
    pub fn retry(&mut self) -> CatalogRequest {
        self.resource = Resource::Loading;
        self.repository.detail_request(&self.name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn resource(&self) -> &Resource<DetailRecord> {
        &self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RequestKind;

    const PIKACHU: &str = include_str!("../../tests/fixtures/pikachu.json");

    #[test]
    fn open_starts_loading_with_lowercase_route() {
        let (detail, request) = DetailController::open(Repository::default(), "Pikachu");
        assert!(detail.resource().is_loading());
        assert_eq!(detail.name(), "pikachu");
        assert_eq!(request.kind, RequestKind::Detail { name: "pikachu".into() });
    }

    #[test]
    fn response_populates_record() {
        let (mut detail, _) = DetailController::open(Repository::default(), "pikachu");
        assert!(detail.on_response("pikachu", &CatalogResponse::new(200, PIKACHU.into())));

        let record = detail.resource().data().unwrap();
        assert_eq!(record.id, 25);
        assert_eq!(record.heading(), "#25 Pikachu");
    }

    #[test]
    fn responses_for_other_entries_are_dropped() {
        let (mut detail, _) = DetailController::open(Repository::default(), "raichu");
        assert!(!detail.on_response("pikachu", &CatalogResponse::new(200, PIKACHU.into())));
        assert!(detail.resource().is_loading());
    }

    #[test]
    fn retry_resets_to_loading() {
        let (mut detail, _) = DetailController::open(Repository::default(), "pikachu");
        detail.on_response("pikachu", &CatalogResponse::new(404, vec![]));
        assert_eq!(detail.resource().message(), Some("Request failed with HTTP status 404"));

        let request = detail.retry();
        assert!(detail.resource().is_loading());
        assert!(request.url.ends_with("/pokemon/pikachu"));
    }
}
