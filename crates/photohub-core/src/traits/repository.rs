//! Generic repository and ownership traits.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::UserId;

/// Lookup and removal by primary key, shared by every store.
///
/// Entity-specific queries and writes live on the per-entity store
/// traits in `photohub-database`.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if a row was removed.
    async fn delete(&self, id: Id) -> AppResult<bool>;
}

/// A resource that belongs to exactly one user.
pub trait Owned {
    /// The user who created the resource.
    fn owner_id(&self) -> UserId;
}
