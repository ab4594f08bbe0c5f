//! Platform wiring for the session store, configuration and API client.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`];
//!   the API base URL comes from `APARTMENT_API_URL` at compile time, else the default.
//! - **Native**: files under `<data_dir>/apartment-dashboard/` via [`store::FileStore`],
//!   with an optional `dashboard.toml` in the same directory.

use std::sync::Arc;

use api::{ApiClient, ApiError, Navigator};
use store::{DashboardConfig, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::FileStore;

/// The API client as used by every view.
pub type Api = ApiClient<PlatformStorage>;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("apartment-dashboard")
}

/// Open the platform session store.
pub fn make_session_store() -> SessionStore<PlatformStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::new(store::FileStore::new(data_dir()))
    }
}

/// Load the dashboard configuration, falling back to defaults.
pub fn load_config() -> DashboardConfig {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        match option_env!("APARTMENT_API_URL") {
            Some(url) => DashboardConfig::default().with_base_url(url),
            None => DashboardConfig::default(),
        }
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        DashboardConfig::load_from_dir(&data_dir()).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable dashboard config: {e}");
            DashboardConfig::default()
        })
    }
}

/// Build the API client over the platform session store.
pub fn make_api_client(
    config: &DashboardConfig,
    navigator: Arc<dyn Navigator>,
) -> Result<Api, ApiError> {
    ApiClient::new(&config.api.base_url, make_session_store(), navigator)
}
