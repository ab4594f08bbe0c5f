//! Authentication context and hooks for the UI.

use std::sync::Arc;

use api::Navigator;
use dioxus::prelude::*;
use store::{DashboardConfig, SessionSnapshot};

use crate::session::{load_config, make_api_client, Api};

/// Full-page navigation through `window.location`.
///
/// Navigating to the page already shown is skipped, so a rejected login on
/// `/login` keeps its inline error.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                if location.pathname().ok().as_deref() == Some(path) {
                    return;
                }
                let _ = location.set_href(path);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!(path, "Navigation requested outside the browser");
    }
}

/// Get the current session view.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<SessionSnapshot> {
    use_context::<Signal<SessionSnapshot>>()
}

/// The shared API client. Only valid below [`AuthProvider`].
pub fn use_api() -> Api {
    use_context::<Api>()
}

pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}

/// Provider component that owns the session and the API client.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let ready = use_hook(|| {
        let config = load_config();
        let client = make_api_client(&config, Arc::new(BrowserNavigator));
        provide_context(config);
        match client {
            Ok(client) => {
                let snapshot = client.session().snapshot();
                provide_context(client);
                Ok(snapshot)
            }
            Err(e) => {
                tracing::error!("Cannot create API client: {e}");
                Err(e.to_string())
            }
        }
    });

    let auth_state = use_signal(|| ready.clone().unwrap_or_default());
    use_context_provider(|| auth_state);

    match ready {
        Ok(_) => rsx! {
            {children}
        },
        Err(message) => rsx! {
            div { class: "fatal-error", "{message}" }
        },
    }
}

/// Two-click confirmation for signing out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LogoutStep {
    #[default]
    Idle,
    Confirming,
}

impl LogoutStep {
    /// Advance on a click. Returns the next step and whether to sign out now.
    fn press(self) -> (Self, bool) {
        match self {
            LogoutStep::Idle => (LogoutStep::Confirming, false),
            LogoutStep::Confirming => (LogoutStep::Idle, true),
        }
    }
}

/// Button to log out the current user.
/// The first click asks for confirmation; the second signs out.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let client = use_api();
    let mut step = use_signal(LogoutStep::default);

    let onclick = move |_| {
        let client = client.clone();
        let (next, confirmed) = step().press();
        step.set(next);
        async move {
            if confirmed {
                api::auth::sign_out(&client).await;
                auth_state.set(client.session().snapshot());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            if step() == LogoutStep::Confirming { "Confirm logout?" } else { "{label}" }
        }
        if step() == LogoutStep::Confirming {
            button {
                class: "btn btn-small",
                onclick: move |_| step.set(LogoutStep::Idle),
                "Cancel"
            }
        }
    }
}
