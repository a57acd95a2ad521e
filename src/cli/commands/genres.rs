//! Genres command.

use super::tmdb_catalog;
use crate::models::config::Config;
use anyhow::Result;
use colored::Colorize;

/// List genres with their ids.
pub async fn genres(config: &Config) -> Result<()> {
    let catalog = tmdb_catalog(config)?;
    let genres = catalog.genres().await?;

    if genres.is_empty() {
        println!("{}", "No genres found.".yellow());
        return Ok(());
    }

    println!("{}", format!("Genres ({}):", genres.len()).bold().cyan());
    for genre in &genres {
        println!(" {:>6}  {}", genre.id, genre.name);
    }
    Ok(())
}
