//! Language command.

use super::open_session;
use crate::models::config::Config;
use crate::models::session::Language;
use crate::utils::i18n;
use anyhow::Result;
use colored::Colorize;

/// Show the language, set it, or toggle between the two.
pub async fn language(config: &Config, requested: Option<&str>) -> Result<()> {
    let mut session = open_session(config);

    let language = match requested.map(str::trim) {
        None => {
            let current = session.language();
            println!("{} {}", "Language:".bold(), current);
            println!("  toggle -> {}", i18n::toggle_label(current));
            return Ok(());
        }
        Some(s) if s.eq_ignore_ascii_case("toggle") => session.toggle_language(),
        Some(s) => {
            let language: Language = s.parse()?;
            session.set_language(language);
            language
        }
    };

    println!(
        "{} {} ({})",
        "✓".green(),
        language,
        i18n::translate(language, "popularMovies")
    );
    Ok(())
}
