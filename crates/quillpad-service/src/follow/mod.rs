//! Follow/unfollow operations.

pub mod service;

pub use service::{FollowService, FollowState};
