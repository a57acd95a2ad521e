//! Catalog data model.
//!
//! These types mirror the JSON returned by the movie metadata API. Every
//! query produces fresh values; nothing here is mutated after decoding.

use serde::{Deserialize, Serialize};

/// A movie as returned by list, search and discover queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    /// Absent or null means the UI renders a placeholder.
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Average vote on a 0-10 scale.
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u64>>,
}

impl Movie {
    /// Release year parsed from the `YYYY-MM-DD` release date.
    pub fn year(&self) -> Option<u16> {
        self.release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .and_then(|y| y.parse().ok())
    }

    /// Rating formatted with one decimal, hidden when missing or zero.
    pub fn rating_label(&self) -> Option<String> {
        self.vote_average
            .filter(|v| *v > 0.0)
            .map(|v| format!("{:.1}", v))
    }
}

/// Genre reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Genre list response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// One page of movies from popular, search or discover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagedResult {
    /// 1-based page number. Some responses omit it.
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

impl PagedResult {
    /// Page number, falling back to the page that was requested.
    pub fn page_or(&self, requested: u32) -> u32 {
        self.page.unwrap_or(requested)
    }

    /// Total pages, never less than one.
    pub fn total_pages_or_one(&self) -> u32 {
        self.total_pages.unwrap_or(1).max(1)
    }
}
