//! # quillpad-entity
//!
//! Domain entities mapped to database tables via `sqlx::FromRow`, plus the
//! creation/update payload structs used by the repositories.

pub mod comment;
pub mod follow;
pub mod group;
pub mod post;
pub mod session;
pub mod user;
