//! # Session store — token and user record over a key-value backend
//!
//! [`SessionStore`] wraps any [`KeyValueStorage`] and exposes the two session
//! fields the dashboard cares about: an opaque bearer token and the signed-in
//! [`UserInfo`]. Both live under fixed keys ([`TOKEN_KEY`], [`USER_KEY`]) so a
//! page reload (or a process restart on native) picks the session back up.
//!
//! ## Semantics
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`token`](SessionStore::token) / [`set_token`](SessionStore::set_token) | Raw access; `set_token` overwrites unconditionally. |
//! | [`user`](SessionStore::user) / [`set_user`](SessionStore::set_user) | JSON (de)serialisation. A malformed stored value reads as `None`. |
//! | [`begin`](SessionStore::begin) | Login write: token and user together. |
//! | [`clear`](SessionStore::clear) | Logout / expiry: both keys removed together. |
//! | [`is_authenticated`](SessionStore::is_authenticated) | Token present. Validity is the backend's call. |
//! | [`role`](SessionStore::role) | Derived from the stored user. |
//!
//! All operations are synchronous. Handles are cheap to clone and share the
//! same backend.

use crate::models::{Role, UserInfo};

/// Storage key holding the opaque access token.
pub const TOKEN_KEY: &str = "apartment_auth_token";
/// Storage key holding the JSON-serialised [`UserInfo`].
pub const USER_KEY: &str = "apartment_user_info";

/// Synchronous string key-value storage.
///
/// Writes never fail from the caller's point of view; backends log and
/// swallow their own errors.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Read-only view of authentication state, as consumed by the route guard.
pub trait SessionState {
    fn is_authenticated(&self) -> bool;
    fn role(&self) -> Option<Role>;
}

/// The session persisted in a [`KeyValueStorage`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
    }

    /// Load the stored user. Returns `None` if nothing is stored or the stored
    /// value is not a well-formed user record.
    pub fn user(&self) -> Option<UserInfo> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!("Ignoring malformed stored user: {}", e);
                None
            }
        }
    }

    pub fn set_user(&self, user: &UserInfo) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            Err(e) => tracing::warn!("Failed to serialise user: {}", e),
        }
    }

    /// Persist a freshly issued session.
    pub fn begin(&self, token: &str, user: &UserInfo) {
        self.set_token(token);
        self.set_user(user);
    }

    /// Remove both token and user.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user().and_then(|u| u.role)
    }

    /// Capture the current state for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.is_authenticated(),
            user: self.user(),
        }
    }
}

impl<S: KeyValueStorage> SessionState for SessionStore<S> {
    fn is_authenticated(&self) -> bool {
        SessionStore::is_authenticated(self)
    }

    fn role(&self) -> Option<Role> {
        SessionStore::role(self)
    }
}

/// Point-in-time copy of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub user: Option<UserInfo>,
}

impl SessionState for SessionSnapshot {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }
}
