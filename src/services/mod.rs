//! External service clients.

pub mod catalog;
pub mod tmdb;

pub use catalog::Catalog;
