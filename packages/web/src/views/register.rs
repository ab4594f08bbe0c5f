//! Registration page with role-specific fields and a live password meter.

use std::str::FromStr;

use api::auth::register;
use api::models::{RegistrationForm, Role};
use dioxus::prelude::*;
use ui::views::BUILDING_NAMES;
use ui::{use_api, PasswordStrength};

use crate::Route;

const SUCCESS_MESSAGE: &str = "Account created successfully! Redirecting to login...";

#[component]
pub fn Register() -> Element {
    let client = use_api();
    let nav = use_navigator();
    let mut form = use_signal(RegistrationForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<&'static str>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            success.set(None);
            loading.set(true);

            match register(&client, form()).await {
                Ok(response) => {
                    tracing::info!(
                        "Registered new account: {}",
                        response.message.as_deref().unwrap_or("ok")
                    );
                    success.set(Some(SUCCESS_MESSAGE));
                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    nav.replace(Route::Root {});
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    let role = form.read().role;
    let password = form.read().password.clone();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "Create Account" }
                p { class: "muted", "Join the apartment management system" }

                form {
                    onsubmit: handle_register,

                    if let Some(message) = error() {
                        div { class: "error-banner", "{message}" }
                    }
                    if let Some(message) = success() {
                        div { class: "success-banner", "{message}" }
                    }

                    label { r#for: "role", "Role" }
                    select {
                        id: "role",
                        value: "{role}",
                        onchange: move |e| {
                            if let Ok(role) = Role::from_str(&e.value()) {
                                form.write().role = role;
                            }
                        },
                        for choice in [Role::Tenant, Role::Owner, Role::Employee, Role::Admin] {
                            option { key: "{choice}", value: "{choice}", selected: choice == role, "{choice}" }
                        }
                    }

                    label { r#for: "full_name", "Full Name" }
                    input {
                        id: "full_name",
                        placeholder: "Enter your full name",
                        value: form.read().full_name.clone(),
                        oninput: move |e| form.write().full_name = e.value(),
                    }

                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: form.read().email.clone(),
                        oninput: move |e| form.write().email = e.value(),
                    }

                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        placeholder: "Choose a username",
                        value: form.read().username.clone(),
                        oninput: move |e| form.write().username = e.value(),
                    }

                    {match role {
                        Role::Tenant => rsx! {
                            label { r#for: "apartment_name", "Apartment Name" }
                            input {
                                id: "apartment_name",
                                placeholder: "e.g., Sunrise Apartments",
                                value: form.read().apartment_name.clone(),
                                oninput: move |e| form.write().apartment_name = e.value(),
                            }
                            label { r#for: "room_no", "Room Number" }
                            input {
                                id: "room_no",
                                placeholder: "e.g., 101, 202",
                                value: form.read().room_no.clone(),
                                oninput: move |e| form.write().room_no = e.value(),
                            }
                        },
                        Role::Owner => rsx! {
                            label { r#for: "managed_building", "Managed Building" }
                            select {
                                id: "managed_building",
                                onchange: move |e| form.write().managed_building = e.value(),
                                option { value: "", "Select Building" }
                                for (code, name) in BUILDING_NAMES {
                                    option {
                                        key: "{code}",
                                        value: code,
                                        selected: form.read().managed_building == code,
                                        "{code} - {name}"
                                    }
                                }
                            }
                            label { r#for: "apartment_name", "Apartment Name" }
                            input {
                                id: "apartment_name",
                                placeholder: "e.g., Sunrise Apartments",
                                value: form.read().apartment_name.clone(),
                                oninput: move |e| form.write().apartment_name = e.value(),
                            }
                            label { r#for: "apartment_no", "Apartment Number" }
                            input {
                                id: "apartment_no",
                                placeholder: "e.g., A-101",
                                value: form.read().apartment_no.clone(),
                                oninput: move |e| form.write().apartment_no = e.value(),
                            }
                        },
                        Role::Employee => rsx! {
                            label { r#for: "department", "Department" }
                            input {
                                id: "department",
                                placeholder: "e.g., Maintenance",
                                value: form.read().department.clone(),
                                oninput: move |e| form.write().department = e.value(),
                            }
                        },
                        Role::Admin => rsx! {},
                    }}

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Create a password",
                        autocomplete: "new-password",
                        value: "{password}",
                        oninput: move |e| form.write().password = e.value(),
                    }
                    PasswordStrength { password: password.clone() }

                    label { r#for: "confirm_password", "Confirm Password" }
                    input {
                        id: "confirm_password",
                        r#type: "password",
                        placeholder: "Confirm your password",
                        autocomplete: "new-password",
                        value: form.read().confirm_password.clone(),
                        oninput: move |e| form.write().confirm_password = e.value(),
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: loading() || success().is_some(),
                        if loading() { "Creating account..." } else { "Create Account" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
