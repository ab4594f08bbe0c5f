use serde::{Deserialize, Serialize};

use super::{string_or_number, string_or_number_opt, TrendBucket};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Payment {
    #[serde(default, deserialize_with = "string_or_number")]
    pub payment_id: String,
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub tenant_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub room_no: Option<String>,
    #[serde(default)]
    pub payment_amount: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub risk_score: Option<f64>,
}

/// A payment flagged by the delay-risk model.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RiskAlert {
    #[serde(default, deserialize_with = "string_or_number")]
    pub payment_id: String,
    #[serde(default)]
    pub tenant_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub room_no: Option<String>,
    #[serde(default)]
    pub payment_amount: f64,
    #[serde(default)]
    pub risk_score: f64,
}

impl RiskAlert {
    /// Risk score as a whole percentage.
    pub fn risk_percent(&self) -> u32 {
        (self.risk_score.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
}

impl PaymentQuery {
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentTrends {
    #[serde(default)]
    pub by_status: Vec<TrendBucket>,
    #[serde(default)]
    pub by_month: Vec<TrendBucket>,
}
