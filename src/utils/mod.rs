//! Shared helpers.

pub mod fs;
pub mod i18n;
