//! Group (post category) entity.

pub mod model;

pub use model::{CreateGroup, Group};
