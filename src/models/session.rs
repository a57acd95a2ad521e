//! Session data model: credentials and language preference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locally stored login. Only used as an "is logged in" flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Locale code as persisted.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Whether text in this language is laid out right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(crate::Error::UnknownLanguage(other.to_string())),
        }
    }
}

/// In-memory session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub credentials: Option<Credentials>,
    pub language: Language,
}

impl SessionState {
    /// A session is authenticated while credentials are present.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}
