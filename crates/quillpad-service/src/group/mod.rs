//! Group directory operations.

pub mod service;

pub use service::GroupService;
