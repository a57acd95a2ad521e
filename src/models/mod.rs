//! Data models.

pub mod config;
pub mod movie;
pub mod session;
