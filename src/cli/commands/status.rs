//! Status command.

use super::open_session;
use crate::models::config::Config;
use crate::utils::i18n;
use anyhow::Result;
use colored::Colorize;

/// Show who is logged in and the current language.
pub async fn status(config: &Config) -> Result<()> {
    let session = open_session(config);
    let language = session.language();

    match session.credentials() {
        Some(credentials) => println!(
            "{} {}",
            format!("{}:", i18n::translate(language, "email")).bold(),
            credentials.email
        ),
        None => println!("{}", "Not logged in.".yellow()),
    }
    println!("{} {}", "Language:".bold(), language);
    println!("{} {}", "State file:".bold(), config.state_file.display());

    Ok(())
}
