use api::models::{ComplaintCounts, ComplaintFilter, ComplaintQuery, ComplaintStatus, ComplaintUpdate};
use dioxus::prelude::*;

use super::{ErrorBanner, Loading, Notice};
use crate::{use_api, use_config, Navbar, PriorityTag, StatusTag, SummaryCard};

/// Work queue of assigned complaints with filters and status transitions.
#[component]
pub fn EmployeeDashboard() -> Element {
    let client = use_api();
    let limit = use_config().dashboard.employee_complaints;
    let mut filter = use_signal(ComplaintFilter::default);
    let mut notice = use_signal(|| Option::<String>::None);

    let mut complaints = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.complaints(&ComplaintQuery::limit(limit)).await }
        }
    });

    let advance = use_callback(move |(complaint_id, next): (String, ComplaintStatus)| {
        let client = client.clone();
        spawn(async move {
            match client
                .update_complaint(&complaint_id, &ComplaintUpdate::status(next))
                .await
            {
                Ok(_) => {
                    notice.set(Some(format!("Complaint marked {}", next.as_str())));
                    complaints.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to update complaint {complaint_id}: {e}");
                    notice.set(Some(format!("Failed to update status: {e}")));
                }
            }
        });
    });

    let body = match &*complaints.read() {
        Some(Ok(list)) => {
            let counts = ComplaintCounts::tally(list);
            let active = filter();
            let shown: Vec<_> = active.apply(list).into_iter().cloned().collect();
            rsx! {
                div {
                    class: "summary-grid three",
                    SummaryCard { label: "Pending", value: counts.pending.to_string(), tone: "warning" }
                    SummaryCard { label: "In Progress", value: counts.in_progress.to_string() }
                    SummaryCard { label: "Resolved", value: counts.resolved.to_string(), tone: "success" }
                }
                div {
                    class: "summary-grid three",
                    SummaryCard { label: "High Priority", value: counts.high.to_string(), tone: "danger" }
                    SummaryCard { label: "Medium Priority", value: counts.medium.to_string(), tone: "warning" }
                    SummaryCard { label: "Low Priority", value: counts.low.to_string(), tone: "success" }
                }
                div {
                    class: "filters",
                    for option in ComplaintFilter::ALL {
                        button {
                            key: "{option.label()}",
                            class: if active == option { "chip active" } else { "chip" },
                            onclick: move |_| filter.set(option),
                            "{option.label()}"
                        }
                    }
                }
                if shown.is_empty() {
                    p { class: "empty", "No complaints match this filter." }
                }
                ul {
                    class: "complaint-list",
                    for complaint in shown {
                        li {
                            key: "{complaint.complaint_id}",
                            div {
                                p { class: "strong", "{complaint.complaint_text}" }
                                p {
                                    class: "muted",
                                    "{complaint.complaint_category}"
                                    if let Some(room) = complaint.room_no.as_deref() {
                                        " · Room {room}"
                                    }
                                }
                            }
                            div {
                                class: "tags",
                                PriorityTag { priority: complaint.priority }
                                StatusTag { status: complaint.complaint_status }
                                if let Some(next) = complaint.complaint_status.next() {
                                    button {
                                        class: "btn btn-small btn-primary",
                                        onclick: {
                                            let id = complaint.complaint_id.clone();
                                            move |_| advance.call((id.clone(), next))
                                        },
                                        if next == ComplaintStatus::InProgress { "Start Work" } else { "Mark Resolved" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load complaints: {e}") } },
        None => rsx! { Loading {} },
    };

    rsx! {
        Navbar { title: "Employee Dashboard" }
        div {
            class: "dashboard",
            Notice { message: notice }
            {body}
        }
    }
}
