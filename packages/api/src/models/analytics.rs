use serde::Deserialize;

use super::string_or_number_opt;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmployeePerformance {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub total_assigned: u64,
    #[serde(default)]
    pub resolved: u64,
    #[serde(default)]
    pub in_progress: u64,
    #[serde(default)]
    pub pending: u64,
    /// Percentage, already rounded by the backend.
    #[serde(default)]
    pub resolution_rate: f64,
    #[serde(default)]
    pub current_workload: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BuildingRevenue {
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Defaulter {
    #[serde(rename = "_id", default, deserialize_with = "string_or_number_opt")]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub tenant_name: Option<String>,
    #[serde(default)]
    pub block_no: Option<String>,
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub room_no: Option<String>,
    #[serde(default)]
    pub overdue_count: u64,
    #[serde(default)]
    pub total_overdue_amount: f64,
}

impl Defaulter {
    pub fn display_name(&self) -> &str {
        self.tenant_name
            .as_deref()
            .or(self.tenant_id.as_deref())
            .unwrap_or("Unknown tenant")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentAnalytics {
    #[serde(default)]
    pub collection_rate: f64,
    #[serde(default)]
    pub total_payments: u64,
    #[serde(default)]
    pub paid_payments: u64,
    #[serde(default)]
    pub pending_payments: u64,
    #[serde(default)]
    pub overdue_payments: u64,
    #[serde(default)]
    pub revenue_by_building: Vec<BuildingRevenue>,
    #[serde(default)]
    pub top_defaulters: Vec<Defaulter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_analytics() {
        let analytics: PaymentAnalytics = serde_json::from_str(
            r#"{
                "collection_rate": 82.5,
                "revenue_by_building": [{"building": "B1", "revenue": 120000}],
                "top_defaulters": [
                    {"_id": "T1002", "tenant_name": null, "block_no": "B1", "room_no": 126,
                     "overdue_count": 3, "total_overdue_amount": 55500}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(analytics.revenue_by_building[0].revenue, 120000.0);
        let defaulter = &analytics.top_defaulters[0];
        assert_eq!(defaulter.display_name(), "T1002");
        assert_eq!(defaulter.room_no.as_deref(), Some("126"));
    }
}
