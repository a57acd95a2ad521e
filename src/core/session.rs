//! Session store.
//!
//! Keeps the logged-in credentials and the language preference in memory
//! and mirrors every change to a key-value store. The in-memory state is
//! authoritative: a failed write is logged and the session carries on.

use crate::core::validator;
use crate::models::session::{Credentials, Language, SessionState};
use crate::utils::fs;
use crate::Result;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Storage key for credentials.
pub const AUTH_KEY: &str = "auth";
/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "language";

/// Persistent key-value storage for session entries.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Key-value store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Current entries for a read-modify-write. Content that does not parse
    /// is replaced by an empty object so the next write repairs the file.
    fn entries_for_update(&self) -> Result<Map<String, Value>> {
        match fs::read_json_object(&self.path) {
            Err(e @ crate::Error::Io(_)) => Err(e),
            Err(e) => {
                tracing::warn!(
                    "Overwriting unreadable state file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Map::new())
            }
            ok => ok,
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(fs::read_json_object(&self.path)?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut object = self.entries_for_update()?;
        object.insert(key.to_string(), value);
        fs::write_json_object(&self.path, &object)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut object = self.entries_for_update()?;
        if object.remove(key).is_some() {
            fs::write_json_object(&self.path, &object)?;
        }
        Ok(())
    }
}

/// Volatile key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Map<String, Value>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Owns the session state and its persistence.
pub struct SessionStore {
    state: SessionState,
    storage: Box<dyn KeyValueStore>,
}

impl SessionStore {
    /// Read persisted state once. Unreadable entries fall back to defaults.
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let credentials = read_entry::<Credentials>(storage.as_ref(), AUTH_KEY);
        let language = read_entry::<Language>(storage.as_ref(), LANGUAGE_KEY).unwrap_or_default();

        Self {
            state: SessionState {
                credentials,
                language,
            },
            storage,
        }
    }

    /// Open the JSON state file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::load(Box::new(JsonFileStore::new(path)))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.state.credentials.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    /// Fail with `NotLoggedIn` unless credentials are present.
    pub fn require_authenticated(&self) -> Result<&Credentials> {
        self.credentials().ok_or(crate::Error::NotLoggedIn)
    }

    /// Validate and store credentials.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        if !validator::validate_email(email) {
            return Err(crate::Error::InvalidEmail(email.to_string()));
        }
        if !validator::validate_password(password) {
            return Err(crate::Error::InvalidPassword);
        }

        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.persist(AUTH_KEY, &credentials);
        self.state.credentials = Some(credentials);
        tracing::info!("Logged in as {}", email);
        Ok(())
    }

    /// Clear credentials. The language preference is kept.
    pub fn logout(&mut self) {
        self.state.credentials = None;
        if let Err(e) = self.storage.remove(AUTH_KEY) {
            tracing::warn!("Failed to clear stored credentials: {}", e);
        }
        tracing::info!("Logged out");
    }

    pub fn set_language(&mut self, language: Language) {
        self.state.language = language;
        self.persist(LANGUAGE_KEY, &language);
    }

    /// Switch to the other language and return it.
    pub fn toggle_language(&mut self) -> Language {
        let next = self.state.language.toggled();
        self.set_language(next);
        next
    }

    fn persist<T: serde::Serialize>(&mut self, key: &str, value: &T) {
        let result = serde_json::to_value(value)
            .map_err(crate::Error::from)
            .and_then(|v| self.storage.set(key, v));
        if let Err(e) = result {
            tracing::warn!("Failed to persist {}: {}", key, e);
        }
    }
}

fn read_entry<T: serde::de::DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    match storage.get(key) {
        Ok(Some(Value::Null)) | Ok(None) => None,
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Ignoring unreadable {} entry: {}", key, e);
                None
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Reads work, every write fails.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Value>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: Value) -> Result<()> {
            Err(crate::Error::other("disk full"))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(crate::Error::other("disk full"))
        }
    }

    #[test]
    fn test_login_rejects_invalid_input() {
        let mut store = SessionStore::load(Box::<MemoryStore>::default());
        assert!(matches!(
            store.login("not-an-email", "Abcdef1!"),
            Err(crate::Error::InvalidEmail(_))
        ));
        assert!(matches!(
            store.login("you@example.com", "short"),
            Err(crate::Error::InvalidPassword)
        ));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_logout_keeps_language() {
        let mut store = SessionStore::load(Box::<MemoryStore>::default());
        store.set_language(Language::Ar);
        store.login("you@example.com", "Abcdef1!").unwrap();
        assert!(store.is_authenticated());

        store.logout();
        assert!(!store.is_authenticated());
        assert!(matches!(
            store.require_authenticated(),
            Err(crate::Error::NotLoggedIn)
        ));
        assert_eq!(store.language(), Language::Ar);
    }

    #[test]
    fn test_write_failures_keep_memory_state() {
        let mut store = SessionStore::load(Box::new(ReadOnlyStore));
        store.login("you@example.com", "Abcdef1!").unwrap();
        assert_eq!(store.toggle_language(), Language::Ar);

        assert!(store.is_authenticated());
        assert_eq!(store.language(), Language::Ar);

        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_unreadable_entries_use_defaults() {
        let mut memory = MemoryStore::default();
        memory.set(AUTH_KEY, json!({"email": 3})).unwrap();
        memory.set(LANGUAGE_KEY, json!("fr")).unwrap();

        let store = SessionStore::load(Box::new(memory));
        assert!(!store.is_authenticated());
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn test_null_auth_entry_is_logged_out() {
        let mut memory = MemoryStore::default();
        memory.set(AUTH_KEY, Value::Null).unwrap();
        let store = SessionStore::load(Box::new(memory));
        assert!(!store.is_authenticated());
    }
}
