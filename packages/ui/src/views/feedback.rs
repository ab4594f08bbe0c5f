use dioxus::prelude::*;

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "loading", "{label}" }
    }
}

/// Inline failure message. Views show this instead of their content when a
/// fetch fails.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", "{message}" }
    }
}

/// Dismissable outcome of a user action (assignment, deletion, ...).
#[component]
pub fn Notice(mut message: Signal<Option<String>>) -> Element {
    let Some(text) = message() else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "notice",
            span { "{text}" }
            button {
                class: "notice-close",
                onclick: move |_| message.set(None),
                "×"
            }
        }
    }
}
