//! Follow (subscription) entity.

pub mod model;

pub use model::Follow;
