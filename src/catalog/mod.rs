//! Catalog layer: PokéAPI requests, wire types, and the repository.
//!
//! # Architecture
//!
//! ```text
//! Controller → Repository → CatalogClient → CatalogRequest → Action::Fetch
//!                                                                 │
//!                                                   Zellij web_request
//!                                                                 │
//! Controller ← Resource ← Repository ← CatalogClient ← CatalogResponse
//! ```
//!
//! # Modules
//!
//! - [`client`]: URL building and JSON decoding
//! - [`repository`]: failure boundary producing [`Resource`](crate::domain::Resource) values
//! - [`requests`]: request/response envelopes and host routing context
//! - [`responses`]: serde wire types

pub mod client;
pub mod repository;
pub mod requests;
pub mod responses;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use repository::Repository;
pub use requests::{CatalogRequest, CatalogResponse, RequestKind};
pub use responses::{DetailPayload, ListPayload, NamedResource};
