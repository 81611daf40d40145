//! Blog resource: record definition, boundary validation and the service
//! that orchestrates identity assignment on top of a [`crate::storage::BlogStore`].

pub mod domain;
pub mod service;

pub use domain::{parse_blog_id, Blog};
pub use service::BlogService;
