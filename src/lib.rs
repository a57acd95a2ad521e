//! Movie Browser Library
//!
//! Browse popular movies, search, filter by genre and paginate through a
//! TMDB-backed catalog, with a locally stored login and language choice.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
