//! Shared test fixtures: an in-memory catalog with call recording.

#![allow(dead_code)]

use async_trait::async_trait;
use movie_browser::models::movie::{Genre, Movie, PagedResult};
use movie_browser::services::Catalog;
use movie_browser::Result;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn movie(id: u64) -> Movie {
    Movie {
        id,
        title: format!("M{}", id),
        poster_path: Some(format!("/m{}.jpg", id)),
        overview: Some(format!("Overview of M{}", id)),
        release_date: Some("2024-05-01".to_string()),
        vote_average: Some(7.0),
        genre_ids: Some(vec![28]),
    }
}

/// Twenty movies numbered from `(page - 1) * 20 + 1 + offset`.
pub fn page_of(page: u32, offset: u64, total_pages: u32) -> PagedResult {
    let first = u64::from(page - 1) * 20 + 1 + offset;
    PagedResult {
        page: Some(page),
        results: (first..first + 20).map(movie).collect(),
        total_pages: Some(total_pages),
        total_results: Some(u64::from(total_pages) * 20),
    }
}

/// Catalog that records every call. Searches wait for `release_search`
/// when gated.
#[derive(Default)]
pub struct ScriptedCatalog {
    pub calls: Mutex<Vec<String>>,
    pub search_gate: Option<Arc<Notify>>,
    pub fail_popular_page: Option<u32>,
}

impl ScriptedCatalog {
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            search_gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Catalog for ScriptedCatalog {
    async fn popular(&self, page: u32) -> Result<PagedResult> {
        self.record(format!("popular:{}", page));
        if self.fail_popular_page == Some(page) {
            return Err(movie_browser::Error::Api {
                operation: "getPopularMovies",
                status: 503,
                body: "Service Unavailable".to_string(),
            });
        }
        Ok(page_of(page, 0, 50))
    }

    async fn search(&self, query: &str, page: u32) -> Result<PagedResult> {
        self.record(format!("search:{}:{}", query, page));
        if let Some(ref gate) = self.search_gate {
            gate.notified().await;
        }
        Ok(page_of(page, 5000, 2))
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        self.record("genres".to_string());
        Ok(vec![
            Genre {
                id: 28,
                name: "Action".to_string(),
            },
            Genre {
                id: 35,
                name: "Comedy".to_string(),
            },
        ])
    }

    async fn discover_by_genre(&self, genre_id: u64, page: u32) -> Result<PagedResult> {
        self.record(format!("discover:{}:{}", genre_id, page));
        Ok(page_of(page, 1000, 7))
    }
}
