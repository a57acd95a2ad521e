//! Startup check that the catalog API accepts our credentials.

use crate::models::config::Config;
use crate::services::tmdb::{TmdbClient, TmdbConfig};
use colored::Colorize;

/// Why the catalog cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error("API key not configured")]
    MissingKey,

    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    #[error("invalid API key")]
    InvalidKey,

    #[error("connection failed: {0}")]
    Unreachable(String),
}

impl PreflightError {
    pub fn hint(&self) -> &'static str {
        match self {
            PreflightError::MissingKey => "Set TMDB_API_KEY or tmdb.api_key in config.toml",
            PreflightError::ClientSetup(_) => "Check the tmdb section of config.toml",
            PreflightError::InvalidKey => "Check your TMDB_API_KEY environment variable",
            PreflightError::Unreachable(_) => "Check your network connection",
        }
    }
}

/// Verify the TMDB key is present and accepted.
pub async fn check_tmdb(config: &Config) -> Result<(), PreflightError> {
    let tmdb = TmdbConfig::from_settings(&config.tmdb).map_err(|_| PreflightError::MissingKey)?;
    let client =
        TmdbClient::new(tmdb).map_err(|e| PreflightError::ClientSetup(e.to_string()))?;

    match client.verify_api_key().await {
        Ok(true) => Ok(()),
        Ok(false) => Err(PreflightError::InvalidKey),
        Err(e) => Err(PreflightError::Unreachable(e.to_string())),
    }
}

/// Print a failed check with its hint.
pub fn print_failure(error: &PreflightError) {
    println!("{} {}: {}", "[FAIL]".red(), "TMDB API".bold(), error);
    println!("  {} {}", "->".yellow(), error.hint());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let mut config = Config::default();
        config.tmdb.api_key = None;

        let err = check_tmdb(&config).await.unwrap_err();
        assert!(matches!(err, PreflightError::MissingKey));
        assert_eq!(err.to_string(), "API key not configured");
        assert!(err.hint().contains("TMDB_API_KEY"));
    }

    #[tokio::test]
    async fn test_blank_key_counts_as_missing() {
        let mut config = Config::default();
        config.tmdb.api_key = Some("   ".to_string());

        let err = check_tmdb(&config).await.unwrap_err();
        assert!(matches!(err, PreflightError::MissingKey));
    }
}
