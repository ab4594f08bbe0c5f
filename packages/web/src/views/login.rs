//! Login page: username/password form that hands off to the role dashboard.

use api::auth::sign_in;
use api::models::LoginRequest;
use dioxus::prelude::*;
use store::RoutePolicy;
use ui::icons::FaBuilding;
use ui::{use_api, use_auth, Icon};

use crate::{Redirect, Route};

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let client = use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if let Some(dashboard) = RoutePolicy::skip_login(&auth()) {
        return rsx! { Redirect { to: dashboard.to_string() } };
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let credentials = LoginRequest {
                username: username().trim().to_string(),
                password: password(),
            };
            match sign_in(&client, &credentials).await {
                Ok(landing) => {
                    auth.set(client.session().snapshot());
                    nav.replace(Route::from_path(landing));
                }
                Err(e) => {
                    tracing::warn!("Login failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 {
                    Icon { icon: FaBuilding, width: 24, height: 24 }
                    " Apartment Manager"
                }
                p { class: "muted", "Sign in to your dashboard" }

                form {
                    onsubmit: handle_login,

                    if let Some(message) = error() {
                        div { class: "error-banner", "{message}" }
                    }

                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        placeholder: "Enter your username",
                        autocomplete: "username",
                        required: true,
                        value: "{username}",
                        oninput: move |e| username.set(e.value()),
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Enter your password",
                        autocomplete: "current-password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register here" }
                }
            }
        }
    }
}
