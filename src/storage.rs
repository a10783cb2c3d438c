//! Browser Storage
//!
//! `localStorage` as a key-value backend for the persistence bridge. The
//! storage handle is looked up per call, so a browser that disables it just
//! yields errors that the bridge swallows.

use recipe_core::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn backend_error(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", e))
}

impl LocalStorage {
    fn handle() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::handle()?.get_item(key).map_err(backend_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::handle()?.set_item(key, value).map_err(backend_error)
    }
}
