//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{load_config, make_api_client, make_session_store, Api, PlatformStorage};

pub mod views;

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_api, use_auth, use_config, AuthProvider, BrowserNavigator, LogoutButton};

mod summary_card;
pub use summary_card::{format_amount, SummaryCard};

mod priority_tag;
pub use priority_tag::{PaymentTag, PriorityTag, StatusTag};

mod password_strength;
pub use password_strength::PasswordStrength;
