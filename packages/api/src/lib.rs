//! # API crate: typed client for the apartment-management backend
//!
//! Everything the dashboards need to talk to the REST backend lives here. The
//! session itself (token + user record) lives in the `store` crate; this crate
//! reads it to authenticate requests and clears it when the backend says the
//! token is no longer valid.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | `sign_in` / `sign_out` / `register` flows and password-strength rules |
//! | [`client`] | [`ApiClient`], one method per backend endpoint |
//! | [`error`] | [`ApiError`] and form [`ValidationError`]s |
//! | [`interceptor`] | Bearer-token injection and the 401 session-expiry handler |
//! | [`models`] | Request/response payloads (complaints, payments, analytics, ...) |

pub mod auth;
pub mod client;
pub mod error;
pub mod interceptor;
pub mod models;

pub use client::ApiClient;
pub use error::{ApiError, ValidationError};
pub use interceptor::{Navigator, NoopNavigator, SessionInterceptor};
pub use models::{Role, UserInfo};
pub use store::DashboardConfig;
