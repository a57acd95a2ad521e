//! Login and register commands.
//!
//! Both validate the same way and store the credentials locally; there is
//! no server-side account.

use super::open_session;
use crate::models::config::Config;
use crate::utils::i18n;
use anyhow::Result;
use colored::Colorize;

/// Which form was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn label_key(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
        }
    }
}

/// Validate and store credentials.
pub async fn login(config: &Config, mode: AuthMode, email: &str, password: &str) -> Result<()> {
    let mut session = open_session(config);
    let language = session.language();

    match session.login(email, password) {
        Ok(()) => {
            println!(
                "{} {}: {}",
                "✓".green(),
                i18n::translate(language, mode.label_key()).bold(),
                email
            );
            Ok(())
        }
        Err(crate::Error::InvalidEmail(_)) => {
            anyhow::bail!(i18n::translate(language, "invalidEmail").to_string())
        }
        Err(crate::Error::InvalidPassword) => {
            anyhow::bail!(i18n::translate(language, "invalidPassword").to_string())
        }
        Err(e) => Err(e.into()),
    }
}
