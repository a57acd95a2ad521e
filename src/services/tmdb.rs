//! TMDB API client.

use crate::models::config::TmdbConfig as TmdbSettings;
use crate::models::movie::{Genre, GenreList, PagedResult};
use crate::services::catalog::Catalog;
use crate::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// TMDB client configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API key or Bearer token (JWT)
    pub api_key: String,
    pub language: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Whether to use Bearer token authentication (API v4 style)
    pub use_bearer: bool,
}

impl TmdbConfig {
    /// Create config from the application settings.
    /// Supports both API key (v3) and Bearer token (v4) formats.
    pub fn from_settings(settings: &TmdbSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(crate::Error::TmdbApiKeyMissing)?;

        // Bearer tokens start with "eyJ" (base64 encoded JWT header)
        let use_bearer = api_key.starts_with("eyJ");

        Ok(Self {
            api_key,
            language: settings.language.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            timeout_secs: settings.timeout_secs,
            use_bearer,
        })
    }
}

/// TMDB API client.
pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Build a request with proper authentication.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        if self.config.use_bearer {
            request.header("Authorization", format!("Bearer {}", self.config.api_key))
        } else {
            request
        }
    }

    /// Build URL with optional api_key parameter (only for v3 style).
    fn build_url(&self, path: &str, extra_params: &str) -> String {
        build_url(&self.config, path, extra_params)
    }

    /// GET a path and decode the body, surfacing non-success statuses.
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        extra_params: &str,
    ) -> Result<T> {
        let url = self.build_url(path, extra_params);
        tracing::debug!("{} -> {}", operation, path);

        let resp = self.build_request(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(crate::Error::Api {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json().await?)
    }

    /// Verify API key is valid.
    pub async fn verify_api_key(&self) -> Result<bool> {
        let url = self.build_url("authentication", "");
        let resp = self.build_request(&url).send().await?;
        Ok(resp.status().is_success())
    }
}

#[async_trait]
impl Catalog for TmdbClient {
    async fn popular(&self, page: u32) -> Result<PagedResult> {
        self.get_json("getPopularMovies", "movie/popular", &format!("&page={}", page))
            .await
    }

    async fn search(&self, query: &str, page: u32) -> Result<PagedResult> {
        self.get_json(
            "searchMovies",
            "search/movie",
            &format!("&query={}&page={}", urlencoding::encode(query), page),
        )
        .await
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        let list: GenreList = self.get_json("getGenreList", "genre/movie/list", "").await?;
        Ok(list.genres)
    }

    async fn discover_by_genre(&self, genre_id: u64, page: u32) -> Result<PagedResult> {
        self.get_json(
            "discoverByGenre",
            "discover/movie",
            &format!("&with_genres={}&page={}", genre_id, page),
        )
        .await
    }
}

fn build_url(config: &TmdbConfig, path: &str, extra_params: &str) -> String {
    if config.use_bearer {
        format!(
            "{}/{}?language={}{}",
            config.base_url, path, config.language, extra_params
        )
    } else {
        format!(
            "{}/{}?api_key={}&language={}{}",
            config.base_url, path, config.api_key, config.language, extra_params
        )
    }
}

/// Join the image base and a poster path.
pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!("{}{}", image_base_url, poster_path)
}
