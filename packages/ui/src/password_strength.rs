use api::auth::password::{self, Strength};
use dioxus::prelude::*;

/// Live strength meter and requirement checklist for a password field.
/// Renders nothing while the password is empty.
#[component]
pub fn PasswordStrength(password: String) -> Element {
    let Some(report) = password::evaluate(&password) else {
        return rsx! {};
    };
    let tone = match report.strength {
        Strength::Weak => "weak",
        Strength::Medium => "medium",
        Strength::Strong => "strong",
    };
    let width = report.strength.meter_percent();

    rsx! {
        div {
            class: "password-strength",
            div {
                class: "strength-header",
                span { "Password strength: " }
                span { class: "strength-label {tone}", "{report.strength.label()}" }
            }
            div {
                class: "strength-track",
                div { class: "strength-fill {tone}", style: "width: {width}%;" }
            }
            ul {
                class: "strength-checks",
                for (label, met) in report.checks.iter().copied() {
                    li {
                        key: "{label}",
                        class: if met { "met" } else { "unmet" },
                        if met { "✓ " } else { "✗ " }
                        "{label}"
                    }
                }
            }
        }
    }
}
