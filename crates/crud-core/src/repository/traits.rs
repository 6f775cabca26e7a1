//! Repository Layer - Core Traits

use async_trait::async_trait;
use crate::domain::{ApiResult, Entity};

/// CRUD operations against a remote store
///
/// Futures are not `Send`: requests run on the browser event loop.
#[async_trait(?Send)]
pub trait Repository<E: Entity> {
    /// Fetch one entity
    async fn find_by_id(&self, id: u32) -> ApiResult<E>;

    /// Fetch the whole collection
    async fn list(&self) -> ApiResult<Vec<E>>;

    /// Create from a draft; returns what the server echoed back
    async fn create(&self, draft: &E::Draft) -> ApiResult<E>;

    /// Overwrite an entity with a draft
    async fn update(&self, id: u32, draft: &E::Draft) -> ApiResult<E>;

    /// Delete an entity
    async fn delete(&self, id: u32) -> ApiResult<()>;
}
