//! Tagged fetch outcome used between the repository and the controllers.

use serde::{Deserialize, Serialize};

/// Outcome of a catalog fetch.
///
/// Exactly one variant is active at a time. `Loading` carries nothing,
/// `Success` carries the decoded payload, and `Error` carries a human-readable
/// message that is shown verbatim in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resource<T> {
    /// A request is in flight.
    Loading,
    /// The request completed and decoded successfully.
    Success(T),
    /// The request failed; the message is ready for display.
    Error(String),
}

impl<T> Resource<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the payload of a `Success`, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the message of an `Error`, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Transforms the payload of a `Success`, leaving other variants intact.
    pub fn map<U, F>(self, f: F) -> Resource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Loading => Resource::Loading,
            Self::Success(data) => Resource::Success(f(data)),
            Self::Error(message) => Resource::Error(message),
        }
    }
}

impl<T> From<crate::domain::Result<T>> for Resource<T> {
    fn from(result: crate::domain::Result<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Error(e.describe()),
        }
    }
}
