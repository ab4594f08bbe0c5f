use api::models::{ComplaintStatus, PaymentStatus, Priority};
use dioxus::prelude::*;

/// Coloured priority label; unclassified complaints show "Unclassified".
#[component]
pub fn PriorityTag(priority: Option<Priority>) -> Element {
    let (class, label) = match priority {
        Some(Priority::High) => ("tag tag-high", "High"),
        Some(Priority::Medium) => ("tag tag-medium", "Medium"),
        Some(Priority::Low) => ("tag tag-low", "Low"),
        None => ("tag", "Unclassified"),
    };
    rsx! {
        span { class: "{class}", "{label}" }
    }
}

#[component]
pub fn StatusTag(status: ComplaintStatus) -> Element {
    let class = match status {
        ComplaintStatus::Pending => "tag tag-pending",
        ComplaintStatus::InProgress => "tag tag-progress",
        ComplaintStatus::Resolved => "tag tag-resolved",
        ComplaintStatus::Unknown => "tag",
    };
    rsx! {
        span { class: "{class}", "{status.as_str()}" }
    }
}

#[component]
pub fn PaymentTag(status: PaymentStatus) -> Element {
    let class = match status {
        PaymentStatus::Paid => "tag tag-resolved",
        PaymentStatus::Pending => "tag tag-pending",
        PaymentStatus::Overdue => "tag tag-high",
        PaymentStatus::Unknown => "tag",
    };
    rsx! {
        span { class: "{class}", "{status.as_str()}" }
    }
}
