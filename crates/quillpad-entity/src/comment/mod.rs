//! Comment entity.

pub mod model;

pub use model::{Comment, CommentWithAuthor, CreateComment};
