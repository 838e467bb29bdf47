//! HTTP middleware builders.

pub mod compression;
pub mod cors;
pub mod logging;
