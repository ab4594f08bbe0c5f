use api::models::Complaint;
use api::UserInfo;
use dioxus::prelude::*;

use crate::{PriorityTag, StatusTag};

/// Complaints with a per-row employee picker.
///
/// `on_assign` receives `(complaint_id, employee_id)` once an employee is chosen.
#[component]
pub fn ComplaintTable(
    complaints: Vec<Complaint>,
    employees: Vec<UserInfo>,
    on_assign: EventHandler<(String, String)>,
    #[props(default)] show_tenant: bool,
) -> Element {
    if complaints.is_empty() {
        return rsx! {
            p { class: "empty", "No complaints found." }
        };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "ID" }
                    th { "Room" }
                    if show_tenant {
                        th { "Tenant" }
                    }
                    th { "Issue" }
                    th { "Category" }
                    th { "Priority" }
                    th { "Status" }
                    th { "Assign To" }
                }
            }
            tbody {
                for complaint in complaints {
                    tr {
                        key: "{complaint.complaint_id}",
                        td { "{complaint.complaint_id}" }
                        td { {complaint.room_no.clone().unwrap_or_default()} }
                        if show_tenant {
                            td { {complaint.tenant_name.clone().unwrap_or_default()} }
                        }
                        td { class: "complaint-text", "{complaint.complaint_text}" }
                        td { "{complaint.complaint_category}" }
                        td { PriorityTag { priority: complaint.priority } }
                        td { StatusTag { status: complaint.complaint_status } }
                        td {
                            select {
                                value: complaint.employee_id.clone().unwrap_or_default(),
                                onchange: {
                                    let id = complaint.complaint_id.clone();
                                    move |evt: FormEvent| {
                                        let employee_id = evt.value();
                                        if !employee_id.is_empty() {
                                            on_assign.call((id.clone(), employee_id));
                                        }
                                    }
                                },
                                option { value: "", "Unassigned" }
                                for employee in employees.iter() {
                                    option {
                                        key: "{employee.user_id}",
                                        value: "{employee.user_id}",
                                        selected: complaint.employee_id.as_deref() == Some(employee.user_id.as_str()),
                                        {employee_label(employee)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn employee_label(employee: &UserInfo) -> String {
    match employee.department.as_deref() {
        Some(department) if !department.is_empty() => {
            format!("{} ({department})", employee.display_name())
        }
        _ => employee.display_name().to_string(),
    }
}
