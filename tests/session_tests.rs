//! Integration tests for the persisted session.
//!
//! Tests cover:
//! - Credentials surviving a restart
//! - Logout keeping the language preference
//! - Corrupt state files

use movie_browser::core::session::{JsonFileStore, KeyValueStore, SessionStore, AUTH_KEY, LANGUAGE_KEY};
use movie_browser::models::session::Language;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_login_persists_across_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.json");

    let mut session = SessionStore::open(&path);
    assert!(!session.is_authenticated());
    session.login("you@example.com", "Abcdef1!").unwrap();
    session.set_language(Language::Ar);
    drop(session);

    let reopened = SessionStore::open(&path);
    assert!(reopened.is_authenticated());
    assert_eq!(reopened.credentials().unwrap().email, "you@example.com");
    assert_eq!(reopened.language(), Language::Ar);
}

#[test]
fn test_logout_clears_only_credentials() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.json");

    let mut session = SessionStore::open(&path);
    session.login("you@example.com", "Abcdef1!").unwrap();
    assert_eq!(session.toggle_language(), Language::Ar);
    session.logout();

    let store = JsonFileStore::new(&path);
    assert_eq!(store.get(AUTH_KEY).unwrap(), None);
    assert_eq!(store.get(LANGUAGE_KEY).unwrap(), Some(json!("ar")));

    let reopened = SessionStore::open(&path);
    assert!(!reopened.is_authenticated());
    assert_eq!(reopened.language(), Language::Ar);
}

#[test]
fn test_invalid_login_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.json");

    let mut session = SessionStore::open(&path);
    assert!(session.login("you@example.com", "password").is_err());
    assert!(!path.exists());
}

#[test]
fn test_corrupt_state_file_starts_fresh() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.json");
    std::fs::write(&path, "{not json").unwrap();

    let mut session = SessionStore::open(&path);
    assert!(!session.is_authenticated());
    assert_eq!(session.language(), Language::En);

    session.login("you@example.com", "Abcdef1!").unwrap();

    let reopened = SessionStore::open(&path);
    assert!(reopened.is_authenticated());
    assert_eq!(
        reopened.credentials().map(|c| c.email.as_str()),
        Some("you@example.com")
    );
}

#[test]
fn test_store_writes_replace_non_object_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let mut store = JsonFileStore::new(&path);
    store.remove(AUTH_KEY).unwrap();
    store.set(LANGUAGE_KEY, json!("ar")).unwrap();

    let session = SessionStore::open(&path);
    assert_eq!(session.language(), Language::Ar);
}

#[test]
fn test_state_in_nested_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deeply").join("nested").join("state.json");

    let mut session = SessionStore::open(&path);
    session.set_language(Language::Ar);

    assert!(path.exists());
}
