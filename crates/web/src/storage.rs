//! `window.localStorage` backend for the cart slot.

use kuroi_cart::storage::{CartStorage, StorageError};
use wasm_bindgen::JsValue;

/// Cart storage backed by the browser's `localStorage`.
///
/// Holds no handle of its own; the storage object is looked up on every call so the type stays
/// `Send + Sync` and can live inside a `StoredValue`.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("Window is unavailable".to_string()))?
            .local_storage()
            .map_err(|error| {
                StorageError::Unavailable(js_value_message(
                    error,
                    "localStorage access was denied",
                ))
            })?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl CartStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?.get_item(key).map_err(|error| {
            StorageError::Unavailable(js_value_message(error, "Failed to read localStorage"))
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|error| StorageError::Rejected {
                key: key.to_string(),
                reason: js_value_message(error, "Failed to write localStorage"),
            })
    }
}

pub(crate) fn js_value_message(error: JsValue, fallback: &str) -> String {
    error.as_string().unwrap_or_else(|| fallback.to_string())
}
