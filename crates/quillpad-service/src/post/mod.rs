//! Post publishing and feed operations.

pub mod service;

pub use service::{PostDetail, PostService};
