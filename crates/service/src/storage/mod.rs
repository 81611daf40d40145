//! Storage abstractions for the service layer.
//!
//! The store owns the canonical copies of all records; callers only ever
//! receive clones.

pub mod blog_store;
pub mod memory;

pub use blog_store::BlogStore;
pub use memory::InMemoryBlogStore;
