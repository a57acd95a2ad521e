//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB configuration.
    pub tmdb: TmdbConfig,
    /// Browse screen tuning.
    pub browse: BrowseConfig,
    /// Where credentials and language are persisted.
    pub state_file: PathBuf,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// API key (v3) or bearer token (v4).
    pub api_key: Option<String>,
    /// Language for responses.
    pub language: String,
    /// API root.
    pub base_url: String,
    /// Prefix prepended to poster paths.
    pub image_base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Browse screen configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Page buttons shown on each side of the current page.
    pub page_window_radius: u32,
    /// Number of popular movies shown in the preview carousel.
    pub preview_size: usize,
    /// Seconds between carousel advances.
    pub carousel_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        let state_file = std::env::var_os("MOVIE_BROWSER_STATE")
            .map(PathBuf::from)
            .unwrap_or_else(|| dirs_config_path().join("state.json"));

        Self {
            tmdb: TmdbConfig::default(),
            browse: BrowseConfig::default(),
            state_file,
        }
    }
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("TMDB_API_KEY").ok(),
            language: "en-US".to_string(),
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_window_radius: 2,
            preview_size: 8,
            carousel_interval_secs: 4,
        }
    }
}

/// Get the configuration directory path.
pub fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie_browser")
}

/// Load configuration from the default location.
pub fn load_config() -> Config {
    load_config_from(&dirs_config_path().join("config.toml"))
}

/// Load configuration from a file, falling back to defaults.
pub fn load_config_from(path: &Path) -> Config {
    if path.exists() {
        match std::fs::read_to_string(path)
            .map_err(crate::Error::from)
            .and_then(|content| parse_config(&content))
        {
            Ok(config) => return config,
            Err(e) => tracing::warn!("Ignoring config {:?}: {}", path, e),
        }
    }

    Config::default()
}

/// Parse a TOML config document. Missing keys take their defaults.
pub fn parse_config(content: &str) -> crate::Result<Config> {
    let mut config: Config = toml::from_str(content)?;
    // An empty key in the file should not hide the environment variable.
    if config.tmdb.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
        config.tmdb.api_key = std::env::var("TMDB_API_KEY").ok();
    }
    Ok(config)
}
