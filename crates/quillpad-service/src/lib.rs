//! # quillpad-service
//!
//! Business rules for Quillpad. Services validate input, enforce ownership,
//! and orchestrate repositories; they never build SQL themselves.

pub mod comment;
pub mod context;
pub mod follow;
pub mod group;
pub mod post;
pub mod user;

pub use context::RequestContext;
