//! # quillpad-auth
//!
//! Authentication for the Quillpad platform.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation, validation, and blocklist management
//! - `password` — Argon2id password hashing and policy enforcement
//! - `session` — Session lifecycle management (login, refresh, logout)

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{SessionManager, SessionStore};
