use api::models::{ComplaintQuery, ComplaintUpdate, PaymentQuery};
use dioxus::prelude::*;

use super::{ComplaintTable, ErrorBanner, Loading, Notice};
use crate::icons::FaBuilding;
use crate::summary_card::format_amount;
use crate::{use_api, use_auth, use_config, Icon, Navbar, PaymentTag, SummaryCard};

/// Display names of the known buildings, keyed by building code.
pub const BUILDING_NAMES: [(&str, &str); 8] = [
    ("B1", "Maple Heights"),
    ("B2", "Harmony Residency"),
    ("B3", "Sunrise Enclave"),
    ("B4", "Lakeview Towers"),
    ("B5", "Green Meadows"),
    ("B6", "Silver Oaks"),
    ("B7", "Crystal View"),
    ("B8", "Riverside Park"),
];

fn building_name(code: &str) -> &str {
    BUILDING_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, name)| name)
}

#[component]
pub fn OwnerDashboard() -> Element {
    let client = use_api();
    let auth = use_auth();
    let config = use_config().dashboard;
    let recent_complaints = config.recent_complaints;
    let recent_payments = config.recent_payments;
    let mut notice = use_signal(|| Option::<String>::None);

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
                    .complaints(&ComplaintQuery::limit(recent_complaints))
                    .await
            }
        }
    });
    let payments = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.payments(&PaymentQuery::limit(recent_payments)).await }
        }
    });
    let employees = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.employees().await }
        }
    });

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

    let building = auth().user.and_then(|u| u.managed_building);

    let summary_view = match &*summary.read() {
        Some(Ok(summary)) => rsx! {
            div {
                class: "summary-grid",
                SummaryCard { label: "Apartments in Building", value: summary.total_apartments.to_string() }
                SummaryCard { label: "Building Revenue", value: format_amount(summary.total_revenue), tone: "success" }
                SummaryCard { label: "Pending Complaints", value: summary.pending_complaints.to_string(), tone: "warning" }
                SummaryCard { label: "Overdue Payments", value: summary.overdue_payments.to_string(), tone: "danger" }
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

    let payments_view = match &*payments.read() {
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "empty", "No payments recorded." } },
        Some(Ok(list)) => rsx! {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Tenant" }
                        th { "Room" }
                        th { "Amount" }
                        th { "Status" }
                        th { "Date" }
                    }
                }
                tbody {
                    for payment in list.iter().take(6) {
                        tr {
                            key: "{payment.payment_id}",
                            td { {payment.tenant_name.clone().or(payment.tenant_id.clone()).unwrap_or_default()} }
                            td { {payment.room_no.clone().unwrap_or_default()} }
                            td { "{format_amount(payment.payment_amount)}" }
                            td { PaymentTag { status: payment.payment_status } }
                            td { {payment.payment_date.clone().unwrap_or_default()} }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load payments: {e}") } },
        None => rsx! { Loading {} },
    };

    rsx! {
        Navbar { title: "Owner Dashboard" }
        div {
            class: "dashboard",
            if let Some(code) = building {
                div {
                    class: "banner",
                    div {
                        p { class: "banner-caption", "Managing Building" }
                        h2 { "{building_name(&code)}" }
                        p { class: "banner-caption", "Building Code: {code}" }
                    }
                    Icon { icon: FaBuilding, width: 48, height: 48 }
                }
            }
            Notice { message: notice }
            {summary_view}
            div {
                class: "panel",
                h3 { "Property Complaints" }
                {complaints_view}
            }
            div {
                class: "panel",
                h3 { "Recent Payments" }
                {payments_view}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_name() {
        assert_eq!(building_name("B4"), "Lakeview Towers");
        assert_eq!(building_name("B9"), "B9");
    }
}
