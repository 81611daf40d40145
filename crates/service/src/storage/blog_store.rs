use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::Blog;

/// Keyed storage of blog records.
///
/// Presence is reported through return values, never as an error: the store
/// has no opinion on what a missing record means to the caller.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Add a record under a fresh `id`. Callers guarantee `id` is unused.
    async fn insert(&self, id: Uuid, blog: Blog);
    /// Delete the record; returns whether it existed.
    async fn remove(&self, id: Uuid) -> bool;
    /// Copy of the stored record, if any.
    async fn get(&self, id: Uuid) -> Option<Blog>;
    /// Overwrite an existing record; returns `false` and leaves the store untouched if absent.
    async fn replace(&self, id: Uuid, blog: Blog) -> bool;
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
