//! Analytics tab. Trend data is shown as plain tables.

use api::models::TrendBucket;
use dioxus::prelude::*;

use super::{ErrorBanner, Loading};
use crate::summary_card::format_amount;
use crate::{use_api, SummaryCard};

#[component]
pub(super) fn AnalyticsPanel() -> Element {
    let client = use_api();
    let performance = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.employee_performance().await }
        }
    });
    let payments = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.payment_analytics().await }
        }
    });
    let complaint_trends = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.complaint_trends().await }
        }
    });
    let payment_trends = use_resource(move || {
        let client = client.clone();
        async move { client.payment_trends().await }
    });

    let payments_view = match &*payments.read() {
        Some(Ok(analytics)) => rsx! {
            div {
                class: "summary-grid",
                SummaryCard { label: "Collection Rate", value: format!("{:.1}%", analytics.collection_rate), tone: "success" }
                SummaryCard { label: "Paid", value: analytics.paid_payments.to_string() }
                SummaryCard { label: "Pending", value: analytics.pending_payments.to_string(), tone: "warning" }
                SummaryCard { label: "Overdue", value: analytics.overdue_payments.to_string(), tone: "danger" }
            }
            div {
                class: "panel",
                h3 { "Revenue by Building" }
                table {
                    class: "data-table",
                    thead { tr { th { "Building" } th { "Revenue" } } }
                    tbody {
                        for row in analytics.revenue_by_building.iter() {
                            tr {
                                key: "{row.building}",
                                td { "{row.building}" }
                                td { "{format_amount(row.revenue)}" }
                            }
                        }
                    }
                }
            }
            div {
                class: "panel danger",
                h3 { "Top Defaulters" }
                if analytics.top_defaulters.is_empty() {
                    p { class: "empty", "No overdue payments." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Tenant" }
                                th { "Block" }
                                th { "Room" }
                                th { "Overdue" }
                                th { "Amount" }
                            }
                        }
                        tbody {
                            for defaulter in analytics.top_defaulters.iter() {
                                tr {
                                    td { "{defaulter.display_name()}" }
                                    td { {defaulter.block_no.clone().unwrap_or_default()} }
                                    td { {defaulter.room_no.clone().unwrap_or_default()} }
                                    td { "{defaulter.overdue_count}" }
                                    td { "{format_amount(defaulter.total_overdue_amount)}" }
                                }
                            }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load payment analytics: {e}") } },
        None => rsx! { Loading {} },
    };

    let performance_view = match &*performance.read() {
        Some(Ok(list)) => rsx! {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Employee" }
                        th { "Department" }
                        th { "Assigned" }
                        th { "Resolved" }
                        th { "In Progress" }
                        th { "Pending" }
                        th { "Resolution Rate" }
                    }
                }
                tbody {
                    for employee in list.iter() {
                        tr {
                            key: "{employee.employee_id}",
                            td { "{employee.full_name}" }
                            td { {employee.department.clone().unwrap_or_default()} }
                            td { "{employee.total_assigned}" }
                            td { "{employee.resolved}" }
                            td { "{employee.in_progress}" }
                            td { "{employee.pending}" }
                            td { {format!("{:.1}%", employee.resolution_rate)} }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load employee performance: {e}") } },
        None => rsx! { Loading {} },
    };

    let complaint_trends_view = match &*complaint_trends.read() {
        Some(Ok(trends)) => rsx! {
            div {
                class: "trend-grid",
                TrendTable { title: "Complaints by Category", buckets: trends.by_category.clone() }
                TrendTable { title: "Complaints by Status", buckets: trends.by_status.clone() }
                TrendTable { title: "Complaints by Priority", buckets: trends.by_priority.clone() }
            }
        },
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load complaint trends: {e}") } },
        None => rsx! { Loading {} },
    };

    let payment_trends_view = match &*payment_trends.read() {
        Some(Ok(trends)) => rsx! {
            div {
                class: "trend-grid",
                TrendTable { title: "Payments by Status", buckets: trends.by_status.clone() }
                TrendTable { title: "Payments by Month", buckets: trends.by_month.clone() }
            }
        },
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load payment trends: {e}") } },
        None => rsx! { Loading {} },
    };

    rsx! {
        {payments_view}
        div {
            class: "panel",
            h3 { "Employee Performance" }
            {performance_view}
        }
        div {
            class: "panel",
            h3 { "Complaint Trends" }
            {complaint_trends_view}
        }
        div {
            class: "panel",
            h3 { "Payment Trends" }
            {payment_trends_view}
        }
    }
}

#[component]
fn TrendTable(title: String, buckets: Vec<TrendBucket>) -> Element {
    let with_amount = buckets
        .iter()
        .any(|b| b.total_amount.or(b.total_revenue).is_some());

    rsx! {
        div {
            class: "trend-table",
            h4 { "{title}" }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Key" }
                        th { "Count" }
                        if with_amount {
                            th { "Amount" }
                        }
                    }
                }
                tbody {
                    for bucket in buckets.iter() {
                        tr {
                            td { {bucket.key.clone().unwrap_or_else(|| "(none)".to_string())} }
                            td { "{bucket.count}" }
                            if with_amount {
                                td { {format_amount(bucket.total_amount.or(bucket.total_revenue).unwrap_or_default())} }
                            }
                        }
                    }
                }
            }
        }
    }
}
