use api::models::{ComplaintQuery, NewComplaint, PaymentQuery, COMPLAINT_CATEGORIES};
use dioxus::prelude::*;

use super::{ErrorBanner, Loading, Notice};
use crate::icons::FaHouse;
use crate::summary_card::format_amount;
use crate::{use_api, use_auth, use_config, Icon, Navbar, PaymentTag, PriorityTag, StatusTag, SummaryCard};

#[component]
pub fn TenantDashboard() -> Element {
    let client = use_api();
    let auth = use_auth();
    let config = use_config().dashboard;
    let complaint_limit = config.tenant_complaints;
    let payment_limit = config.recent_payments;

    let mut notice = use_signal(|| Option::<String>::None);
    let mut show_form = use_signal(|| false);
    let mut complaint_text = use_signal(String::new);
    let mut category = use_signal(|| COMPLAINT_CATEGORIES[0].to_string());
    let mut submitting = use_signal(|| false);

    let user = auth().user.unwrap_or_default();
    let room_no = user.room_no.clone().unwrap_or_default();
    let apartment_name = user
        .apartment_name
        .clone()
        .unwrap_or_else(|| "My Apartment".to_string());

    let mut summary = use_resource({
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
            async move { client.complaints(&ComplaintQuery::limit(complaint_limit)).await }
        }
    });
    let payments = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.payments(&PaymentQuery::limit(payment_limit)).await }
        }
    });

    let submit = {
        let room_no = room_no.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let text = complaint_text().trim().to_string();
            if text.is_empty() {
                notice.set(Some("Please describe the issue".to_string()));
                return;
            }
            // The room always comes from the signed-in tenant.
            let complaint = NewComplaint {
                complaint_text: text,
                complaint_category: category(),
                room_no: room_no.clone(),
            };
            let client = client.clone();
            spawn(async move {
                submitting.set(true);
                match client.create_complaint(&complaint).await {
                    Ok(created) => {
                        let priority = created
                            .priority
                            .map(|p| format!(" Priority assigned: {}.", p.as_str()))
                            .unwrap_or_default();
                        notice.set(Some(format!("Complaint submitted successfully.{priority}")));
                        complaint_text.set(String::new());
                        category.set(COMPLAINT_CATEGORIES[0].to_string());
                        show_form.set(false);
                        complaints.restart();
                        summary.restart();
                    }
                    Err(e) => {
                        tracing::error!("Failed to submit complaint: {e}");
                        notice.set(Some(format!("Failed to submit complaint: {e}")));
                    }
                }
                submitting.set(false);
            });
        }
    };

    let (complaint_count, pending_payments) = match &*summary.read() {
        Some(Ok(s)) => (s.total_complaints.to_string(), s.pending_payments.to_string()),
        _ => ("-".to_string(), "-".to_string()),
    };

    let complaints_view = match &*complaints.read() {
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "empty", "You have not filed any complaints." } },
        Some(Ok(list)) => rsx! {
            ul {
                class: "complaint-list",
                for complaint in list.iter() {
                    li {
                        key: "{complaint.complaint_id}",
                        div {
                            p { "{complaint.complaint_text}" }
                            p { class: "muted", "{complaint.complaint_category}" }
                        }
                        div {
                            class: "tags",
                            PriorityTag { priority: complaint.priority }
                            StatusTag { status: complaint.complaint_status }
                        }
                    }
                }
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
                        th { "Date" }
                        th { "Amount" }
                        th { "Status" }
                    }
                }
                tbody {
                    for payment in list.iter() {
                        tr {
                            key: "{payment.payment_id}",
                            td { {payment.payment_date.clone().unwrap_or_default()} }
                            td { "{format_amount(payment.payment_amount)}" }
                            td { PaymentTag { status: payment.payment_status } }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load payments: {e}") } },
        None => rsx! { Loading {} },
    };

    rsx! {
        Navbar { title: "Tenant Dashboard" }
        div {
            class: "dashboard",
            div {
                class: "banner tenant",
                div {
                    p { class: "banner-caption", "{apartment_name}" }
                    h2 { "Room {room_no}" }
                    p { class: "banner-caption", "Viewing your personal data only" }
                }
                Icon { icon: FaHouse, width: 48, height: 48 }
            }
            Notice { message: notice }
            div {
                class: "summary-grid three",
                SummaryCard { label: "{apartment_name}", value: format!("Room {room_no}") }
                SummaryCard { label: "My Complaints", value: complaint_count, tone: "warning" }
                SummaryCard { label: "Pending Payments", value: pending_payments, tone: "danger" }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| show_form.toggle(),
                if show_form() { "Cancel" } else { "Submit New Complaint" }
            }
            if show_form() {
                div {
                    class: "panel",
                    h3 { "Submit New Complaint" }
                    form {
                        class: "complaint-form",
                        onsubmit: submit,
                        label { "Category" }
                        select {
                            value: "{category}",
                            onchange: move |evt: FormEvent| category.set(evt.value()),
                            for name in COMPLAINT_CATEGORIES {
                                option { key: "{name}", value: "{name}", "{name}" }
                            }
                        }
                        label { "Description" }
                        textarea {
                            rows: 4,
                            placeholder: "Describe the issue",
                            value: "{complaint_text}",
                            oninput: move |evt: FormEvent| complaint_text.set(evt.value()),
                        }
                        p { class: "muted", "Room {room_no}. Priority is assigned automatically." }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            if submitting() { "Submitting..." } else { "Submit" }
                        }
                    }
                }
            }
            div {
                class: "panel",
                h3 { "My Complaints" }
                {complaints_view}
            }
            div {
                class: "panel",
                h3 { "Payment History" }
                {payments_view}
            }
        }
    }
}
