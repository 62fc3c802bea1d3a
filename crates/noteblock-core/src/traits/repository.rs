//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Storage contract shared by every entity repository.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. Entity-specific
/// queries and writes (lookup by name, insert, update) are defined on
/// the concrete repository structs.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// List every entity in insertion order.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if a row was removed.
    async fn delete(&self, id: Id) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
