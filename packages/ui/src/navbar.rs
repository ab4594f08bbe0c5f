use dioxus::prelude::*;

use crate::icons::FaBuilding;
use crate::{use_auth, Icon, LogoutButton, DASHBOARD_CSS};

/// Top bar shared by every dashboard: title, signed-in user and logout.
#[component]
pub fn Navbar(title: String) -> Element {
    let auth = use_auth();
    let user = auth().user;

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }
        div {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { icon: FaBuilding, width: 18, height: 18 }
                span { "{title}" }
            }
            div {
                class: "navbar-user",
                if let Some(user) = user {
                    span { class: "navbar-name", "{user.display_name()}" }
                    if let Some(role) = user.role {
                        span { class: "role-badge", "{role}" }
                    }
                }
                LogoutButton { class: "btn btn-secondary" }
            }
        }
    }
}
