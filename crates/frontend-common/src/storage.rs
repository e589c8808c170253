//! Browser `localStorage` token store

use taskdeck_http::TokenStore;
use thiserror::Error;
use web_sys::Storage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
}

/// Session tokens kept in `localStorage`, surviving reloads
pub struct LocalTokenStore {
    storage: Storage,
}

impl LocalTokenStore {
    pub fn new() -> Result<Self, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|storage| Self { storage })
            .ok_or(StorageError::Unavailable)
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            warn!("Failed to write {key} to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        if self.storage.remove_item(key).is_err() {
            warn!("Failed to remove {key} from localStorage");
        }
    }
}
