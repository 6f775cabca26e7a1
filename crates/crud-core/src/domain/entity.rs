//! Domain Layer - Core Entity Trait
//!
//! Every remote resource describes where it lives on the REST backend and
//! where the app routes to after it has been written.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::Navigation;

/// Core trait for all remote entities
///
/// Paths are prefixes; the id is appended as the last segment.
pub trait Entity: Sized + Clone + Default + DeserializeOwned + Send + Sync + 'static {
    /// Body sent on create and update
    type Draft: Serialize;

    /// Lowercase singular name used in UI messages and query keys
    const NAME: &'static str;
    /// Field that wraps the array in list responses
    const LIST_FIELD: &'static str;
    /// REST path for list reads
    const LIST_PATH: &'static str;
    /// REST prefix for single reads
    const DETAIL_PATH: &'static str;
    /// REST prefix for PUT and DELETE
    const WRITE_PATH: &'static str;
    /// REST path for creation
    const CREATE_PATH: &'static str;
    /// App route of the list page
    const LIST_ROUTE: &'static str;
    /// App route prefix of the detail page
    const DETAIL_ROUTE: &'static str;

    /// Server-assigned identifier (0 when the server did not send one)
    fn id(&self) -> u32;

    /// One-line label for list rows
    fn summary(&self) -> String;

    fn detail_path(id: u32) -> String {
        format!("{}/{}", Self::DETAIL_PATH, id)
    }

    fn write_path(id: u32) -> String {
        format!("{}/{}", Self::WRITE_PATH, id)
    }

    fn detail_route(id: u32) -> String {
        format!("{}/{}", Self::DETAIL_ROUTE, id)
    }

    /// Where to go after a successful create
    fn after_create() -> Navigation {
        Navigation::replace(Self::LIST_ROUTE)
    }

    /// Where to go after a successful update
    fn after_update(id: u32) -> Navigation {
        Navigation::push(Self::detail_route(id))
    }

    /// Where to go after a successful delete
    fn after_delete() -> Navigation {
        Navigation::replace(Self::LIST_ROUTE)
    }
}

/// Common result type for remote operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to pages
///
/// Cloneable so results can be held in reactive signals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
