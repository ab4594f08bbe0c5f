use dioxus::prelude::*;
use store::RoutePolicy;

use crate::icons::FaLock;
use crate::{use_auth, Icon, LogoutButton};

/// Shown when a signed-in user opens a dashboard their role may not see.
#[component]
pub fn UnauthorizedView() -> Element {
    let auth = use_auth();
    let snapshot = auth();
    let dashboard = RoutePolicy::skip_login(&snapshot);

    rsx! {
        div {
            class: "centered-page",
            Icon { icon: FaLock, width: 40, height: 40 }
            h1 { "Access denied" }
            p { class: "muted", "You do not have permission to view this page." }
            div {
                class: "actions",
                if let Some(home) = dashboard {
                    a { class: "btn btn-primary", href: "{home}", "Go to my dashboard" }
                }
                if snapshot.authenticated {
                    LogoutButton { class: "btn btn-secondary", label: "Sign in as someone else" }
                } else {
                    a { class: "btn btn-primary", href: store::guard::LOGIN_PATH, "Sign in" }
                }
            }
        }
    }
}
