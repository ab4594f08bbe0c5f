use serde::{Deserialize, Serialize};

/// Input features for `POST /predict-payment-delay`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DelayFeatures {
    pub monthly_rent: f64,
    pub avg_payment: f64,
    pub payment_consistency: f64,
    pub delay_rate: f64,
    pub total_complaints: u32,
    pub complaint_rate: f64,
    pub avg_days_since_payment: f64,
    pub room_type_encoded: u32,
    pub complaint_category_encoded: u32,
    pub complaint_status_encoded: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriorityPrediction {
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DelayRiskPrediction {
    #[serde(default)]
    pub will_delay: bool,
    #[serde(default)]
    pub risk_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BatchPredictionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// One entry of `GET /prediction-logs`; inputs and outputs are model-specific.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PredictionLog {
    #[serde(default)]
    pub model_type: String,
    #[serde(default)]
    pub input_data: serde_json::Value,
    #[serde(default)]
    pub output: serde_json::Value,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionLogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
