use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::blog::Blog;
use crate::errors::ServiceError;
use crate::storage::BlogStore;

/// Application service for blog records.
/// Assigns identity on create and turns store absence into `ServiceError::NotFound`.
/// Input is expected to have passed [`Blog::validate`] at the boundary.
pub struct BlogService<S: BlogStore + ?Sized> {
    store: Arc<S>,
}

impl<S: BlogStore + ?Sized> Clone for BlogService<S> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store) }
    }
}

impl<S: BlogStore + ?Sized> BlogService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    pub fn store(&self) -> &Arc<S> { &self.store }

    /// Store `blog` under a freshly generated id, overwriting any client-supplied one.
    #[instrument(skip_all)]
    pub async fn create(&self, blog: Blog) -> Uuid {
        let id = Uuid::new_v4();
        self.store.insert(id, blog.with_id(id)).await;
        info!(blog_id = %id, "blog_created");
        id
    }

    /// Replace the record addressed by `blog.id` wholesale.
    #[instrument(skip_all, fields(blog_id = ?blog.id))]
    pub async fn update(&self, blog: Blog) -> Result<(), ServiceError> {
        let id = blog.id.ok_or_else(|| ServiceError::validation("id is required"))?;
        if !self.store.replace(id, blog).await {
            debug!(blog_id = %id, "blog_update_missing");
            return Err(ServiceError::NotFound);
        }
        info!(blog_id = %id, "blog_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.store.remove(id).await {
            debug!(blog_id = %id, "blog_delete_missing");
            return Err(ServiceError::NotFound);
        }
        info!(blog_id = %id, "blog_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Blog, ServiceError> {
        self.store.get(id).await.ok_or(ServiceError::NotFound)
    }
}
