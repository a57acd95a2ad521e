//! Catalog interface.
//!
//! The four read-only queries the browse screen needs. The HTTP client
//! implements it against TMDB; tests implement it in memory.

use crate::models::movie::{Genre, PagedResult};
use crate::Result;
use async_trait::async_trait;

/// Read-only access to the movie catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Popular movies, one page at a time.
    async fn popular(&self, page: u32) -> Result<PagedResult>;

    /// Free-text title search.
    async fn search(&self, query: &str, page: u32) -> Result<PagedResult>;

    /// Full genre reference list in one call.
    async fn genres(&self) -> Result<Vec<Genre>>;

    /// Movies tagged with a genre.
    async fn discover_by_genre(&self, genre_id: u64, page: u32) -> Result<PagedResult>;
}
