//! Credential format checks.
//!
//! Purely local: these gate whether a login can be submitted and never
//! touch the network.

use regex::Regex;
use std::sync::OnceLock;

/// Characters that count as "special" in a password.
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Password length bounds, inclusive, counted in characters.
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 15;

fn email_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// Check an email has the `local@domain.tld` shape with no whitespace.
pub fn validate_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}

/// Check a password is 8-15 characters with an uppercase letter, a digit
/// and a special character.
pub fn validate_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return false;
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    has_upper && has_digit && has_special
}

/// Both fields valid, i.e. the submit action is enabled.
pub fn can_submit(email: &str, password: &str) -> bool {
    validate_email(email) && validate_password(password)
}
