//! Service layer for the blog resource.
//! - `storage`: keyed record storage, presence reported as booleans.
//! - `blog`: record type, boundary validation and the `BlogService` operation contracts.
//! - `errors`: the error taxonomy the transport layer maps to status codes.

pub mod errors;
pub mod blog;
pub mod storage;

pub use blog::{Blog, BlogService};
pub use errors::ServiceError;
pub use storage::{BlogStore, InMemoryBlogStore};
