use dioxus::prelude::*;

use super::{ErrorBanner, Loading};
use crate::summary_card::format_amount;
use crate::use_api;

/// One card per building with its owner, occupancy, complaints and revenue.
#[component]
pub(super) fn BuildingStatus() -> Element {
    let client = use_api();
    let buildings = use_resource(move || {
        let client = client.clone();
        async move { client.buildings_summary().await }
    });

    let body = match &*buildings.read() {
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "empty", "No buildings found." } },
        Some(Ok(list)) => rsx! {
            div {
                class: "building-grid",
                for building in list.iter() {
                    div {
                        key: "{building.building_code}",
                        class: "building-card",
                        h3 { "{building.building_name}" }
                        p { class: "muted", "{building.building_code}" }
                        dl {
                            dt { "Owner" }
                            dd { {building.owner_name().unwrap_or("Unassigned").to_string()} }
                            dt { "Apartments" }
                            dd { "{building.total_apartments}" }
                            dt { "Complaints" }
                            dd { "{building.total_complaints} ({building.pending_complaints} pending)" }
                            dt { "Revenue" }
                            dd { class: "revenue", "{format_amount(building.total_revenue)}" }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! { ErrorBanner { message: format!("Failed to load buildings: {e}") } },
        None => rsx! { Loading { label: "Loading buildings..." } },
    };

    rsx! {
        div {
            class: "panel",
            h3 { "Building Status" }
            {body}
        }
    }
}
