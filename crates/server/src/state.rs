use std::sync::Arc;

use service::{BlogService, BlogStore, InMemoryBlogStore};

/// Shared handler state. Cloning shares the underlying store.
#[derive(Clone)]
pub struct AppState {
    pub blogs: BlogService<dyn BlogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { blogs: BlogService::new(store) }
    }

    /// Fresh, empty process-lifetime store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBlogStore::new()))
    }
}
