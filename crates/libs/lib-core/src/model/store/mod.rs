//! # Key/Value Store
//!
//! Storage abstraction and repository implementations.
//!
//! [`KeyValueStore`] mirrors the synchronous `localStorage` API: string keys,
//! string values, whole-value reads and writes. The browser frontend wraps
//! `window.localStorage`; tests and native callers use [`MemoryStore`].
//! There is no locking, so two browser tabs writing the same key race and
//! the last write wins.

// region: --- Modules
pub mod models;
pub mod user_repository;
// endregion: --- Modules

// region: --- Re-exports
pub use models::UserForCreate;
pub use user_repository::UserRepository;
// endregion: --- Re-exports

// region: --- Types and Functions
use std::cell::RefCell;
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Read and decode a JSON value. An absent key is `Ok(None)`; malformed JSON is an error.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get_item(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode a value as JSON and write it, replacing any previous value.
pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

/// In-memory store for tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
// endregion: --- Types and Functions

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_read_json_absent_key() {
        let store = MemoryStore::new();
        let value: Option<Vec<u32>> = read_json(&store, "missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read_json() {
        let store = MemoryStore::new();
        write_json(&store, "numbers", &[1, 2, 3]).unwrap();

        assert_eq!(store.get_item("numbers").unwrap().as_deref(), Some("[1,2,3]"));
        let value: Option<Vec<u32>> = read_json(&store, "numbers").unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_read_json_malformed_is_decoding_error() {
        let store = MemoryStore::new();
        store.set_item("numbers", "not json").unwrap();

        let result: Result<Option<Vec<u32>>> = read_json(&store, "numbers");
        assert!(matches!(result, Err(AppError::Decoding(_))));
    }

    #[test]
    fn test_remove_item() {
        let store = MemoryStore::new();
        store.set_item("k", "v").unwrap();
        store.remove_item("k").unwrap();
        assert!(store.get_item("k").unwrap().is_none());
    }
}
