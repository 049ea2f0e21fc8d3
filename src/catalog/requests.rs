//! Outgoing catalog requests and the responses the host hands back.
//!
//! Zellij performs HTTP on the plugin's behalf: the plugin issues a
//! `web_request` with a string map of context, and the host later delivers a
//! `WebRequestResult` carrying the same context. [`RequestKind`] is encoded into
//! that context so every response can be routed back to the component that
//! asked for it.

use crate::domain::error::{PokedexError, Result};
use std::collections::BTreeMap;

const KIND_KEY: &str = "kind";
const LIMIT_KEY: &str = "limit";
const OFFSET_KEY: &str = "offset";
const NAME_KEY: &str = "name";
const NUMBER_KEY: &str = "number";

/// What a request is for, and the parameters needed to route its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// One page of the list endpoint.
    List { limit: u32, offset: u32 },
    /// The detail document for a lower-cased name.
    Detail { name: String },
    /// The sprite PNG for a dex number.
    Sprite { number: u32 },
}

impl RequestKind {
    /// Encodes the kind into a `web_request` context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        match self {
            Self::List { limit, offset } => {
                context.insert(KIND_KEY.to_string(), "list".to_string());
                context.insert(LIMIT_KEY.to_string(), limit.to_string());
                context.insert(OFFSET_KEY.to_string(), offset.to_string());
            }
            Self::Detail { name } => {
                context.insert(KIND_KEY.to_string(), "detail".to_string());
                context.insert(NAME_KEY.to_string(), name.clone());
            }
            Self::Sprite { number } => {
                context.insert(KIND_KEY.to_string(), "sprite".to_string());
                context.insert(NUMBER_KEY.to_string(), number.to_string());
            }
        }
        context
    }

    /// Decodes a kind from a `WebRequestResult` context map.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::Catalog`] if the map was not produced by
    /// [`RequestKind::to_context`].
    pub fn from_context(context: &BTreeMap<String, String>) -> Result<Self> {
        let field = |key: &str| {
            context
                .get(key)
                .ok_or_else(|| PokedexError::Catalog(format!("request context is missing `{key}`")))
        };
        let number = |key: &str| -> Result<u32> {
            let raw = field(key)?;
            raw.parse()
                .map_err(|_| PokedexError::Catalog(format!("request context `{key}` is not a number: {raw}")))
        };

        match field(KIND_KEY)?.as_str() {
            "list" => Ok(Self::List {
                limit: number(LIMIT_KEY)?,
                offset: number(OFFSET_KEY)?,
            }),
            "detail" => Ok(Self::Detail {
                name: field(NAME_KEY)?.clone(),
            }),
            "sprite" => Ok(Self::Sprite {
                number: number(NUMBER_KEY)?,
            }),
            other => Err(PokedexError::Catalog(format!("unknown request kind `{other}`"))),
        }
    }
}

/// A fully built GET request, ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub kind: RequestKind,
    pub url: String,
}

/// Raw HTTP outcome delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl CatalogResponse {
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the body of a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`PokedexError::Http`] for any other status.
    pub fn success_body(&self) -> Result<&[u8]> {
        if self.is_success() {
            Ok(&self.body)
        } else {
            Err(PokedexError::Http { status: self.status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_survive_the_context_map() {
        for kind in [
            RequestKind::List { limit: 20, offset: 40 },
            RequestKind::Detail { name: "mr-mime".into() },
            RequestKind::Sprite { number: 151 },
        ] {
            assert_eq!(RequestKind::from_context(&kind.to_context()).unwrap(), kind);
        }
    }

    #[test]
    fn foreign_contexts_are_rejected() {
        let mut context = BTreeMap::new();
        assert!(RequestKind::from_context(&context).is_err());

        context.insert("kind".to_string(), "list".to_string());
        context.insert("limit".to_string(), "twenty".to_string());
        context.insert("offset".to_string(), "0".to_string());
        let err = RequestKind::from_context(&context).unwrap_err();
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn non_success_status_is_a_transport_failure() {
        let response = CatalogResponse::new(404, b"Not Found".to_vec());
        assert!(matches!(response.success_body(), Err(PokedexError::Http { status: 404 })));
        assert!(CatalogResponse::new(204, vec![]).success_body().is_ok());
    }
}
