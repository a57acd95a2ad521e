//! CLI command implementations.

pub mod browse;
pub mod genres;
pub mod interactive;
pub mod language;
pub mod login;
pub mod logout;
pub mod status;

use crate::core::session::SessionStore;
use crate::models::config::Config;
use crate::services::tmdb::{TmdbClient, TmdbConfig};
use crate::services::Catalog;
use crate::Result;
use std::sync::Arc;

/// Open the persisted session named in the config.
pub fn open_session(config: &Config) -> SessionStore {
    tracing::debug!("Session state file: {:?}", config.state_file);
    SessionStore::open(&config.state_file)
}

/// Build the TMDB catalog from the config.
pub fn tmdb_catalog(config: &Config) -> Result<Arc<dyn Catalog>> {
    let client = TmdbClient::new(TmdbConfig::from_settings(&config.tmdb)?)?;
    Ok(Arc::new(client))
}
