pub mod signal;
pub mod types;
pub mod utils;
