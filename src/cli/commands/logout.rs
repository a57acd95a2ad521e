//! Logout command.

use super::open_session;
use crate::models::config::Config;
use crate::utils::i18n;
use anyhow::Result;
use colored::Colorize;

/// Clear stored credentials. The language preference is kept.
pub async fn logout(config: &Config) -> Result<()> {
    let mut session = open_session(config);
    let language = session.language();

    if !session.is_authenticated() {
        println!("{}", "Not logged in.".yellow());
        return Ok(());
    }

    session.logout();
    println!("{} {}", "✓".green(), i18n::translate(language, "logout"));
    Ok(())
}
