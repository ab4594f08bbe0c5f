use serde::{Deserialize, Serialize};

use super::{string_or_number_opt, Complaint, Payment};

/// `GET /apartments/summary`, already scoped to the caller's role by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApartmentSummary {
    #[serde(default)]
    pub total_apartments: u64,
    #[serde(default)]
    pub total_complaints: u64,
    #[serde(default)]
    pub total_payments: u64,
    #[serde(default)]
    pub pending_complaints: u64,
    #[serde(default)]
    pub in_progress_complaints: u64,
    #[serde(default)]
    pub resolved_complaints: u64,
    #[serde(default)]
    pub high_priority_complaints: u64,
    #[serde(default)]
    pub medium_priority_complaints: u64,
    #[serde(default)]
    pub low_priority_complaints: u64,
    #[serde(default)]
    pub paid_payments: u64,
    #[serde(default)]
    pub pending_payments: u64,
    #[serde(default)]
    pub overdue_payments: u64,
    /// Only present for admins and owners.
    #[serde(default)]
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Apartment {
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub room_no: Option<String>,
    #[serde(default)]
    pub block_no: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub monthly_rent: Option<f64>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<String>,
}

/// `GET /apartments` filters. The backend honours them for admins and owners only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApartmentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// `GET /apartments/{room_no}`: the apartment plus its complaint and payment history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApartmentDetails {
    #[serde(default)]
    pub apartment: Apartment,
    #[serde(default)]
    pub complaints: Vec<Complaint>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BuildingOwner {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// One row of `GET /apartments/buildings/summary`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BuildingSummary {
    #[serde(default)]
    pub building_code: String,
    #[serde(default)]
    pub building_name: String,
    #[serde(default)]
    pub total_apartments: u64,
    #[serde(default)]
    pub total_complaints: u64,
    #[serde(default)]
    pub pending_complaints: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub owner: Option<BuildingOwner>,
}

impl BuildingSummary {
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref()?.full_name.as_deref()
    }
}
