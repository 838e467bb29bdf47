//! Comment operations.

pub mod service;

pub use service::CommentService;
