//! Admin dashboard: a tab shell over the overview, building status, user
//! directory and analytics panels.

use api::models::{ComplaintQuery, ComplaintUpdate, RiskAlert};
use dioxus::prelude::*;

use super::analytics::AnalyticsPanel;
use super::buildings::BuildingStatus;
use super::users::UserDirectory;
use super::{ComplaintTable, ErrorBanner, Loading, Notice};
use crate::icons::{FaBuilding, FaChartLine, FaHouse, FaUsers};
use crate::summary_card::format_amount;
use crate::{use_api, use_config, Icon, Navbar, SummaryCard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    Overview,
    Buildings,
    Users,
    Analytics,
}

impl AdminTab {
    const ALL: [AdminTab; 4] = [
        AdminTab::Overview,
        AdminTab::Buildings,
        AdminTab::Users,
        AdminTab::Analytics,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Buildings => "Building Status",
            AdminTab::Users => "User Directory",
            AdminTab::Analytics => "Analytics",
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let mut active = use_signal(|| AdminTab::Overview);

    rsx! {
        Navbar { title: "Admin Dashboard" }
        div {
            class: "dashboard",
            div {
                class: "tabs",
                for tab in AdminTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if active() == tab { "tab active" } else { "tab" },
                        onclick: move |_| active.set(tab),
                        {match tab {
                            AdminTab::Overview => rsx! { Icon { icon: FaHouse, width: 14, height: 14 } },
                            AdminTab::Buildings => rsx! { Icon { icon: FaBuilding, width: 14, height: 14 } },
                            AdminTab::Users => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
                            AdminTab::Analytics => rsx! { Icon { icon: FaChartLine, width: 14, height: 14 } },
                        }}
                        " {tab.label()}"
                    }
                }
            }
            {match active() {
                AdminTab::Overview => rsx! { Overview {} },
                AdminTab::Buildings => rsx! { BuildingStatus {} },
                AdminTab::Users => rsx! { UserDirectory {} },
                AdminTab::Analytics => rsx! { AnalyticsPanel {} },
            }}
        }
    }
}

/// Headline numbers, AI reclassification, recent complaints and payment risk.
#[component]
fn Overview() -> Element {
    let client = use_api();
    let config = use_config().dashboard;
    let recent = config.recent_complaints;
    let threshold = config.risk_alert_threshold;
    let mut notice = use_signal(|| Option::<String>::None);
    let mut batch_running = use_signal(|| false);

    let summary = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.apartment_summary().await }
        }
    });
    let mut complaints = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                client
                    .complaints(&ComplaintQuery::limit(recent))
                    .await
            }
        }
    });
    let alerts = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.payment_risk_alerts(threshold).await }
        }
    });
    let employees = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.employees().await }
        }
    });

    let batch_predict = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                batch_running.set(true);
                match client.batch_predict_complaints().await {
                    Ok(result) => {
                        notice.set(Some(
                            result
                                .message
                                .unwrap_or_else(|| "Batch prediction completed".to_string()),
                        ));
                        complaints.restart();
                    }
                    Err(e) => {
                        tracing::error!("Batch prediction failed: {e}");
                        notice.set(Some(format!("Batch prediction failed: {e}")));
                    }
                }
                batch_running.set(false);
            });
        }
    };

    let assign = move |(complaint_id, employee_id): (String, String)| {
        let client = client.clone();
        spawn(async move {
            match client
                .update_complaint(&complaint_id, &ComplaintUpdate::assign(employee_id))
                .await
            {
                Ok(_) => {
                    notice.set(Some("Complaint assigned successfully".to_string()));
                    complaints.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to assign complaint {complaint_id}: {e}");
                    notice.set(Some(format!("Failed to assign complaint: {e}")));
                }
            }
        });
    };

    let summary_view = match &*summary.read() {
        Some(Ok(summary)) => rsx! {
            div {
                class: "summary-grid",
                SummaryCard { label: "Total Apartments", value: summary.total_apartments.to_string() }
                SummaryCard { label: "Total Complaints", value: summary.total_complaints.to_string(), tone: "warning" }
                SummaryCard { label: "Total Revenue", value: format_amount(summary.total_revenue), tone: "success" }
                SummaryCard { label: "Overdue Payments", value: summary.overdue_payments.to_string(), tone: "danger" }
            }
            div {
                class: "summary-grid three",
                SummaryCard { label: "High Priority Issues", value: summary.high_priority_complaints.to_string(), tone: "danger" }
                SummaryCard { label: "Medium Priority Issues", value: summary.medium_priority_complaints.to_string(), tone: "warning" }
                SummaryCard { label: "Low Priority Issues", value: summary.low_priority_complaints.to_string(), tone: "success" }
            }
        },
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load summary: {e}") } },
        None => rsx! { Loading {} },
    };

    let employee_list = match &*employees.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    let complaints_view = match &*complaints.read() {
        Some(Ok(list)) => rsx! {
            ComplaintTable {
                complaints: list.clone(),
                employees: employee_list,
                on_assign: assign,
                show_tenant: true,
            }
        },
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load complaints: {e}") } },
        None => rsx! { Loading {} },
    };

    let alerts_view = match &*alerts.read() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "empty", "No payments above the risk threshold." }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "alert-grid",
                for alert in list.iter().take(6).cloned() {
                    RiskAlertCard { key: "{alert.payment_id}", alert }
                }
            }
        },
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load risk alerts: {e}") } },
        None => rsx! { Loading {} },
    };

    rsx! {
        Notice { message: notice }
        {summary_view}
        div {
            class: "panel ai-panel",
            div {
                h3 { "AI Assistant" }
                p { "Re-run priority classification over every stored complaint." }
            }
            button {
                class: "btn btn-primary",
                disabled: batch_running(),
                onclick: batch_predict,
                if batch_running() { "Running..." } else { "Run Batch Prediction" }
            }
        }
        div {
            class: "panel",
            h3 { "Recent Complaints" }
            {complaints_view}
        }
        div {
            class: "panel danger",
            h3 { "High Risk Payment Alerts" }
            {alerts_view}
        }
    }
}

#[component]
fn RiskAlertCard(alert: RiskAlert) -> Element {
    rsx! {
        div {
            class: "alert-card",
            div {
                p { class: "alert-name", {alert.tenant_name.clone().unwrap_or_else(|| "Unknown tenant".to_string())} }
                if let Some(room) = alert.room_no.as_deref() {
                    p { class: "muted", "Room {room}" }
                }
                p { class: "alert-due", "Due: {format_amount(alert.payment_amount)}" }
            }
            div {
                class: "alert-score",
                div { class: "score", "{alert.risk_percent()}%" }
                div { class: "muted", "Risk score" }
            }
        }
    }
}
