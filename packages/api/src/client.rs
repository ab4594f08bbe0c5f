//! # REST client for the apartment-management backend
//!
//! [`ApiClient`] is the only way the dashboards talk to the backend. Every call goes
//! through [`ApiClient::send`], which hands the request to the
//! [`SessionInterceptor`](crate::SessionInterceptor) on the way out (bearer token) and
//! the response to it on the way back (401 handling), so no endpoint can bypass
//! session expiry.
//!
//! Endpoints return the inner payload of the backend's JSON envelopes; list
//! responses such as `{"complaints": [...], "count": n}` come back as a plain `Vec`.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{KeyValueStorage, SessionStore, UserInfo};

use crate::error::ApiError;
use crate::interceptor::{Navigator, SessionInterceptor};
use crate::models::*;

#[derive(Clone)]
pub struct ApiClient<S> {
    http: Client,
    base: Url,
    interceptor: SessionInterceptor<S>,
}

impl<S: KeyValueStorage> ApiClient<S> {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(
        base_url: &str,
        session: SessionStore<S>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            http: Client::new(),
            base,
            interceptor: SessionInterceptor::new(session, navigator),
        })
    }

    pub fn session(&self) -> &SessionStore<S> {
        self.interceptor.session()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.interceptor.navigator()
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base URL. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Run a request through the interceptor and return the raw success body.
    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = self.interceptor.on_request(request).send().await?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await?;
        tracing::debug!(%url, %status, bytes = body.len(), "API response");
        self.interceptor.on_response(status, &body)?;
        Ok(body.to_vec())
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.fetch(self.http.get(self.endpoint(segments))).await
    }

    async fn get_with<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.fetch(self.http.get(self.endpoint(segments)).query(query))
            .await
    }

    async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.fetch(self.http.post(self.endpoint(segments)).json(body))
            .await
    }

    async fn put<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.fetch(self.http.put(self.endpoint(segments)).json(body))
            .await
    }

    async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.fetch(self.http.delete(self.endpoint(segments))).await
    }

    // --- Auth ---

    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post(&["auth", "login"], credentials).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.post(&["auth", "register"], request).await
    }

    pub async fn verify_token(&self) -> Result<VerifyResponse, ApiError> {
        self.get(&["auth", "verify"]).await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.fetch(self.http.post(self.endpoint(&["auth", "logout"])))
            .await
    }

    pub async fn employees(&self) -> Result<Vec<UserInfo>, ApiError> {
        let list: EmployeeList = self.get(&["auth", "employees"]).await?;
        Ok(list.employees)
    }

    pub async fn users(&self) -> Result<Vec<UserInfo>, ApiError> {
        let list: UserList = self.get(&["auth", "users"]).await?;
        Ok(list.users)
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        update: &UserUpdate,
    ) -> Result<MessageResponse, ApiError> {
        self.put(&["auth", "users", user_id], update).await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<MessageResponse, ApiError> {
        self.delete(&["auth", "users", user_id]).await
    }

    // --- Apartments ---

    pub async fn apartments(&self, query: &ApartmentQuery) -> Result<Vec<Apartment>, ApiError> {
        let list: ApartmentList = self.get_with(&["apartments"], query).await?;
        Ok(list.apartments)
    }

    pub async fn apartment_summary(&self) -> Result<ApartmentSummary, ApiError> {
        self.get(&["apartments", "summary"]).await
    }

    pub async fn buildings_summary(&self) -> Result<Vec<BuildingSummary>, ApiError> {
        let list: BuildingList = self.get(&["apartments", "buildings", "summary"]).await?;
        Ok(list.buildings)
    }

    pub async fn apartment_details(&self, room_no: &str) -> Result<ApartmentDetails, ApiError> {
        self.get(&["apartments", room_no]).await
    }

    // --- Complaints ---

    pub async fn complaints(&self, query: &ComplaintQuery) -> Result<Vec<Complaint>, ApiError> {
        let list: ComplaintList = self.get_with(&["complaints"], query).await?;
        Ok(list.complaints)
    }

    pub async fn create_complaint(
        &self,
        complaint: &NewComplaint,
    ) -> Result<CreatedComplaint, ApiError> {
        self.post(&["complaints"], complaint).await
    }

    pub async fn update_complaint(
        &self,
        complaint_id: &str,
        update: &ComplaintUpdate,
    ) -> Result<MessageResponse, ApiError> {
        self.put(&["complaints", complaint_id], update).await
    }

    pub async fn complaint_trends(&self) -> Result<ComplaintTrends, ApiError> {
        self.get(&["complaints", "trends"]).await
    }

    // --- Payments ---

    pub async fn payments(&self, query: &PaymentQuery) -> Result<Vec<Payment>, ApiError> {
        let list: PaymentList = self.get_with(&["payments"], query).await?;
        Ok(list.payments)
    }

    pub async fn payment_risk_alerts(&self, threshold: f64) -> Result<Vec<RiskAlert>, ApiError> {
        let list: RiskAlertList = self
            .get_with(&["payments", "risk-alerts"], &[("threshold", threshold)])
            .await?;
        Ok(list.at_risk_payments)
    }

    pub async fn payment_trends(&self) -> Result<PaymentTrends, ApiError> {
        self.get(&["payments", "trends"]).await
    }

    pub async fn tenant_payments(&self, tenant_id: &str) -> Result<Vec<Payment>, ApiError> {
        let list: PaymentList = self.get(&["payments", "tenant", tenant_id]).await?;
        Ok(list.payments)
    }

    // --- Predictions ---

    pub async fn predict_complaint_priority(
        &self,
        complaint_text: &str,
    ) -> Result<PriorityPrediction, ApiError> {
        let envelope: Prediction<PriorityPrediction> = self
            .post(
                &["predict-complaint-priority"],
                &PriorityRequest { complaint_text },
            )
            .await?;
        Ok(envelope.prediction)
    }

    pub async fn predict_payment_delay(
        &self,
        features: &DelayFeatures,
    ) -> Result<DelayRiskPrediction, ApiError> {
        let envelope: Prediction<DelayRiskPrediction> =
            self.post(&["predict-payment-delay"], features).await?;
        Ok(envelope.prediction)
    }

    /// Ask the backend to reclassify the priority of every stored complaint.
    pub async fn batch_predict_complaints(&self) -> Result<BatchPredictionResult, ApiError> {
        self.fetch(self.http.post(self.endpoint(&["batch-predict-complaints"])))
            .await
    }

    pub async fn prediction_logs(
        &self,
        query: &PredictionLogQuery,
    ) -> Result<Vec<PredictionLog>, ApiError> {
        let list: LogList = self.get_with(&["prediction-logs"], query).await?;
        Ok(list.logs)
    }

    // --- Analytics ---

    pub async fn employee_performance(&self) -> Result<Vec<EmployeePerformance>, ApiError> {
        let list: PerformanceList = self
            .get(&["analytics", "employee-performance"])
            .await?;
        Ok(list.employees)
    }

    pub async fn payment_analytics(&self) -> Result<PaymentAnalytics, ApiError> {
        self.get(&["analytics", "payment-analytics"]).await
    }
}

#[derive(Serialize)]
struct PriorityRequest<'a> {
    complaint_text: &'a str,
}

#[derive(Deserialize)]
struct Prediction<T> {
    prediction: T,
}

#[derive(Deserialize)]
struct EmployeeList {
    #[serde(default)]
    employees: Vec<UserInfo>,
}

#[derive(Deserialize)]
struct UserList {
    #[serde(default)]
    users: Vec<UserInfo>,
}

#[derive(Deserialize)]
struct ApartmentList {
    #[serde(default)]
    apartments: Vec<Apartment>,
}

#[derive(Deserialize)]
struct BuildingList {
    #[serde(default)]
    buildings: Vec<BuildingSummary>,
}

#[derive(Deserialize)]
struct ComplaintList {
    #[serde(default)]
    complaints: Vec<Complaint>,
}

#[derive(Deserialize)]
struct PaymentList {
    #[serde(default)]
    payments: Vec<Payment>,
}

#[derive(Deserialize)]
struct RiskAlertList {
    #[serde(default)]
    at_risk_payments: Vec<RiskAlert>,
}

#[derive(Deserialize)]
struct LogList {
    #[serde(default)]
    logs: Vec<PredictionLog>,
}

#[derive(Deserialize)]
struct PerformanceList {
    #[serde(default)]
    employees: Vec<EmployeePerformance>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptor::NoopNavigator;
    use store::MemoryStore;

    fn client(base: &str) -> ApiClient<MemoryStore> {
        ApiClient::new(base, SessionStore::new(MemoryStore::new()), Arc::new(NoopNavigator)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = client("http://localhost:5000/api");
        assert_eq!(
            api.endpoint(&["apartments", "buildings", "summary"]).as_str(),
            "http://localhost:5000/api/apartments/buildings/summary"
        );

        let api = client("http://localhost:5000/api/");
        assert_eq!(
            api.endpoint(&["complaints", "C 12"]).as_str(),
            "http://localhost:5000/api/complaints/C%2012"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let session = SessionStore::new(MemoryStore::new());
        for bad in ["not a url", "mailto:admin@example.com"] {
            let err = ApiClient::new(bad, session.clone(), Arc::new(NoopNavigator)).err();
            assert!(matches!(err, Some(ApiError::InvalidUrl(_))), "{bad}");
        }
    }

    #[test]
    fn test_envelopes_tolerate_missing_lists() {
        let list: ComplaintList = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(list.complaints.is_empty());

        let alerts: RiskAlertList = serde_json::from_str(
            r#"{"at_risk_payments": [{"payment_id": 7, "risk_score": 0.82}], "count": 1}"#,
        )
        .unwrap();
        assert_eq!(alerts.at_risk_payments[0].payment_id, "7");
        assert_eq!(alerts.at_risk_payments[0].risk_percent(), 82);
    }
}
