//! Error types for the movie browser.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the movie browser.
#[derive(Error, Debug)]
pub enum Error {
    // Credential errors
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Password must be 8-15 characters with 1 capital letter, 1 number, and 1 special character")]
    InvalidPassword,

    #[error("Not logged in. Run: movie-browser login --email <EMAIL> --password <PASSWORD>")]
    NotLoggedIn,

    // TMDB errors
    #[error("TMDB API key not configured. Set TMDB_API_KEY environment variable")]
    TmdbApiKeyMissing,

    #[error("TMDB {operation} failed {status} - {body}")]
    Api {
        operation: &'static str,
        status: u16,
        body: String,
    },

    // Configuration errors
    #[error("Unknown language: {0} (expected en or ar)")]
    UnknownLanguage(String),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// HTTP status carried by an API failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
