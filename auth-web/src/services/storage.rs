//! `localStorage` binding for the account engine.

use lib_core::{AppError, KeyValueStore, Result};
use wasm_bindgen::JsValue;

/// Handle to `window.localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Look up the window's local storage.
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| AppError::Storage("no window available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| AppError::Storage("localStorage is unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> AppError {
    AppError::Storage(format!("{:?}", err))
}
