//! # Filesystem-backed key-value storage
//!
//! [`FileStore`] is the native counterpart of browser local storage: each key
//! is a file under a base directory, so a session survives app restarts the
//! same way a browser profile survives reloads.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── apartment_auth_token   # raw token
//! └── apartment_user_info    # user record JSON
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) to obtain a platform-appropriate base,
//! e.g. `~/.local/share/apartment-dashboard/` on Linux.

use std::path::{Path, PathBuf};

use crate::session::KeyValueStorage;

/// Filesystem-backed storage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStorage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!("Failed to write {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove {}: {}", key, e),
        }
    }
}
