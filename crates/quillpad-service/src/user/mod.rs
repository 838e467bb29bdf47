//! User account and profile operations.

pub mod service;

pub use service::{ProfileView, UserService};
