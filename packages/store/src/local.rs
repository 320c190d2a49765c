//! # localStorage backend — browser-side persistence
//!
//! [`LocalStore`] is the [`StorageBackend`] used on the **web platform**. It
//! persists the session keys into `window.localStorage` via [`web_sys`],
//! which is durable across page loads and scoped to the browser profile.
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with localStorage disabled degrades to
//! "never logged in" rather than crashing the UI; the backend remains the
//! authority on whether any token is valid.

use crate::session::StorageBackend;
use web_sys::Storage;

/// localStorage-backed StorageBackend for the web platform.
///
/// Zero-size and `Clone`-friendly: the underlying `Storage` handle is fetched
/// from the window on every operation, which the browser resolves cheaply.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageBackend for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.clear();
        }
    }
}
