//! `localStorage` backend for the badge store.

use crate::dom;
use rollercoaster_core::{BadgeStore, KeyValueStorage};
use wasm_bindgen::JsValue;

/// Web-specific badge storage using `localStorage`
#[derive(Clone)]
pub struct WebStorage(web_sys::Storage);

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage read failed: {0}")]
    Read(String),
    #[error("localStorage write failed for {key}: {message}")]
    Write { key: String, message: String },
}

impl WebStorage {
    #[must_use]
    pub const fn new(storage: web_sys::Storage) -> Self {
        Self(storage)
    }

    /// Handle to the page's `localStorage`, if the environment has one.
    #[must_use]
    pub fn detect() -> Option<Self> {
        dom::local_storage().map(Self)
    }
}

fn read_err(err: &JsValue) -> WebStorageError {
    WebStorageError::Read(dom::js_error_message(err))
}

fn write_err(key: &str, err: &JsValue) -> WebStorageError {
    WebStorageError::Write {
        key: key.to_string(),
        message: dom::js_error_message(err),
    }
}

impl KeyValueStorage for WebStorage {
    type Error = WebStorageError;

    fn keys(&self) -> Result<Vec<String>, Self::Error> {
        let len = self.0.length().map_err(|e| read_err(&e))?;
        let mut keys = Vec::with_capacity(len as usize);
        for idx in 0..len {
            if let Some(key) = self.0.key(idx).map_err(|e| read_err(&e))? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.0.get_item(key).map_err(|e| read_err(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.0.set_item(key, value).map_err(|e| write_err(key, &e))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.0.remove_item(key).map_err(|e| write_err(key, &e))
    }
}

/// Badge store for this environment: live in a browser with storage, null
/// everywhere else (native tests, server-side rendering).
#[must_use]
pub fn create_web_badge_store() -> BadgeStore<WebStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = WebStorage::detect();
        if storage.is_none() {
            log::info!("localStorage unavailable; badges will not persist");
        }
        BadgeStore::from_capability(storage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        BadgeStore::null()
    }
}
