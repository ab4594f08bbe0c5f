//! Request and response models for the backend REST API.
//!
//! The backend owns these shapes, so most fields are `#[serde(default)]` and
//! identifiers accept either JSON strings or numbers.

mod analytics;
mod apartment;
mod complaint;
mod payment;
mod prediction;
mod user;

pub use analytics::{BuildingRevenue, Defaulter, EmployeePerformance, PaymentAnalytics};
pub use apartment::{
    Apartment, ApartmentDetails, ApartmentQuery, ApartmentSummary, BuildingOwner, BuildingSummary,
};
pub use complaint::{
    Complaint, ComplaintCounts, ComplaintFilter, ComplaintQuery, ComplaintStatus, ComplaintTrends,
    ComplaintUpdate, CreatedComplaint, NewComplaint, Priority, COMPLAINT_CATEGORIES,
};
pub use payment::{Payment, PaymentQuery, PaymentStatus, PaymentTrends, RiskAlert};
pub use prediction::{
    BatchPredictionResult, DelayFeatures, DelayRiskPrediction, PredictionLog, PredictionLogQuery,
    PriorityPrediction,
};
pub use user::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegistrationForm, UserFilter,
    UserUpdate, VerifyResponse,
};
pub use store::{Role, UserInfo};

use serde::{Deserialize, Deserializer};

/// One bucket of a backend aggregation (`{"_id": key, "count": n, ...}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrendBucket {
    #[serde(rename = "_id", default, deserialize_with = "string_or_number_opt")]
    pub key: Option<String>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

pub(crate) fn string_or_number_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}
