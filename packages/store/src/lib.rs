pub mod config;
pub mod guard;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::DashboardConfig;
pub use guard::{authorize, default_landing_for, Decision, RoutePolicy};
pub use models::{Role, UserInfo};
pub use session::{KeyValueStorage, SessionSnapshot, SessionState, SessionStore};
