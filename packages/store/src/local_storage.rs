//! # Browser local storage backend
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] used on the **web platform**. It
//! reads and writes `window.localStorage`, which is scoped to the browser
//! profile and origin and survives page reloads.
//!
//! The struct is zero-size and looks up `localStorage` on every call. Errors
//! (no window, storage disabled, quota exceeded) are logged and swallowed:
//! reads return `None`, writes do nothing.

use web_sys::Storage;

use crate::session::KeyValueStorage;

/// `window.localStorage`-backed storage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable; dropping write to {}", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("localStorage write to {} failed: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
