use std::collections::{hash_map::Entry, HashMap};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::blog::Blog;
use crate::storage::blog_store::BlogStore;

/// Process-lifetime store: one map behind one lock, every operation O(1).
#[derive(Default)]
pub struct InMemoryBlogStore {
    inner: Mutex<HashMap<Uuid, Blog>>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for InMemoryBlogStore {
    async fn insert(&self, id: Uuid, blog: Blog) {
        let mut map = self.inner.lock().await;
        let previous = map.insert(id, blog);
        debug_assert!(previous.is_none(), "blog id {id} inserted twice");
    }

    async fn remove(&self, id: Uuid) -> bool {
        let mut map = self.inner.lock().await;
        map.remove(&id).is_some()
    }

    async fn get(&self, id: Uuid) -> Option<Blog> {
        let map = self.inner.lock().await;
        map.get(&id).cloned()
    }

    async fn replace(&self, id: Uuid, blog: Blog) -> bool {
        let mut map = self.inner.lock().await;
        match map.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.insert(blog);
                true
            }
            Entry::Vacant(_) => false,
        }
    }

    async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}
