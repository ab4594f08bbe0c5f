//! User directory: search, role filter, inline edit and delete.

use api::models::{UserFilter, UserUpdate};
use api::{Role, UserInfo};
use dioxus::prelude::*;

use super::{ErrorBanner, Loading, Notice};
use crate::use_api;

#[component]
pub(super) fn UserDirectory() -> Element {
    let client = use_api();
    let mut filter = use_signal(UserFilter::default);
    let mut editing = use_signal(|| Option::<UserInfo>::None);
    let mut confirm_delete = use_signal(|| Option::<UserInfo>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let mut users = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.users().await }
        }
    });

    let save_edit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(user) = editing() else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                let update = UserUpdate {
                    full_name: user.full_name.clone(),
                    email: Some(user.email.clone()),
                    managed_building: user.managed_building.clone(),
                    department: user.department.clone(),
                    ..Default::default()
                };
                match client.update_user(&user.user_id, &update).await {
                    Ok(_) => {
                        editing.set(None);
                        notice.set(Some("User updated successfully".to_string()));
                        users.restart();
                    }
                    Err(e) => {
                        tracing::error!("Failed to update user {}: {e}", user.user_id);
                        notice.set(Some(format!("Failed to update user: {e}")));
                    }
                }
            });
        }
    };

    let delete_confirmed = move |_| {
        let Some(user) = confirm_delete() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            match client.delete_user(&user.user_id).await {
                Ok(_) => {
                    confirm_delete.set(None);
                    notice.set(Some("User deleted successfully".to_string()));
                    users.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to delete user {}: {e}", user.user_id);
                    confirm_delete.set(None);
                    notice.set(Some(format!("Failed to delete user: {e}")));
                }
            }
        });
    };

    let table = match &*users.read() {
        Some(Ok(list)) => {
            let current = filter();
            let shown: Vec<UserInfo> = current.apply(list).into_iter().cloned().collect();
            rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "User" }
                            th { "Email" }
                            th { "Role" }
                            th { "Details" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in shown {
                            tr {
                                key: "{user.user_id}",
                                td {
                                    div { class: "strong", "{user.display_name()}" }
                                    div { class: "muted", "@{user.username}" }
                                }
                                td { "{user.email}" }
                                td {
                                    span {
                                        class: "role-badge",
                                        {user.role.map_or("Unknown", |r| r.as_str())}
                                    }
                                }
                                td { {role_details(&user)} }
                                td {
                                    button {
                                        class: "btn btn-small",
                                        onclick: {
                                            let user = user.clone();
                                            move |_| editing.set(Some(user.clone()))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-small btn-danger",
                                        onclick: {
                                            let user = user.clone();
                                            move |_| confirm_delete.set(Some(user.clone()))
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load users: {e}") } },
        None => rsx! { Loading { label: "Loading users..." } },
    };

    rsx! {
        div {
            class: "panel",
            h3 { "User Directory" }
            Notice { message: notice }
            div {
                class: "filters",
                input {
                    r#type: "search",
                    placeholder: "Search by name, username or email",
                    value: "{filter().search}",
                    oninput: move |evt: FormEvent| filter.write().search = evt.value(),
                }
                select {
                    onchange: move |evt: FormEvent| filter.write().role = evt.value().parse::<Role>().ok(),
                    option { value: "All", "All roles" }
                    for role in Role::ALL {
                        option { key: "{role}", value: "{role}", "{role}" }
                    }
                }
            }
            {table}

            if let Some(user) = editing() {
                div {
                    class: "modal",
                    form {
                        onsubmit: save_edit,
                        h3 { "Edit {user.username}" }
                        label { "Full name" }
                        input {
                            value: user.full_name.clone().unwrap_or_default(),
                            oninput: move |evt: FormEvent| {
                                if let Some(u) = editing.write().as_mut() {
                                    u.full_name = Some(evt.value());
                                }
                            },
                        }
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{user.email}",
                            oninput: move |evt: FormEvent| {
                                if let Some(u) = editing.write().as_mut() {
                                    u.email = evt.value();
                                }
                            },
                        }
                        if user.role == Some(Role::Owner) {
                            label { "Managed building" }
                            input {
                                value: user.managed_building.clone().unwrap_or_default(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(u) = editing.write().as_mut() {
                                        u.managed_building = Some(evt.value());
                                    }
                                },
                            }
                        }
                        if user.role == Some(Role::Employee) {
                            label { "Department" }
                            input {
                                value: user.department.clone().unwrap_or_default(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(u) = editing.write().as_mut() {
                                        u.department = Some(evt.value());
                                    }
                                },
                            }
                        }
                        div {
                            class: "modal-actions",
                            button {
                                r#type: "button",
                                class: "btn btn-secondary",
                                onclick: move |_| editing.set(None),
                                "Cancel"
                            }
                            button { r#type: "submit", class: "btn btn-primary", "Save" }
                        }
                    }
                }
            }

            if let Some(user) = confirm_delete() {
                div {
                    class: "modal",
                    div {
                        h3 { "Delete {user.display_name()}?" }
                        p { "This removes the account permanently." }
                        div {
                            class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| confirm_delete.set(None),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                onclick: delete_confirmed,
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn role_details(user: &UserInfo) -> String {
    match user.role {
        Some(Role::Owner) => match user.managed_building.as_deref() {
            Some(building) => format!("Building {building}"),
            None => "Unassigned".to_string(),
        },
        Some(Role::Tenant) => user
            .room_no
            .as_deref()
            .map(|room| format!("Room {room}"))
            .unwrap_or_default(),
        Some(Role::Employee) => user.department.clone().unwrap_or_default(),
        _ => String::new(),
    }
}
