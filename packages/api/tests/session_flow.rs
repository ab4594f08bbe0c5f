//! End-to-end session behaviour against an in-process mock backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::auth::{sign_in, sign_out};
use api::models::{ComplaintQuery, ComplaintStatus, LoginRequest};
use api::{ApiClient, ApiError, Navigator};
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use store::{Decision, FileStore, MemoryStore, Role, RoutePolicy, SessionStore, UserInfo};

const OWNER_TOKEN: &str = "tok-owner";

#[derive(Default)]
struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
    }
}

impl RecordingNavigator {
    fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

type Reply = (StatusCode, Json<Value>);

fn expired() -> Reply {
    (StatusCode::UNAUTHORIZED, Json(json!({"msg": "Token has expired"})))
}

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {OWNER_TOKEN}"))
}

async fn login(Json(body): Json<Value>) -> Reply {
    if body["username"] == "owner" && body["password"] == "Own3r!pass" {
        (
            StatusCode::OK,
            Json(json!({
                "message": "Login successful",
                "access_token": OWNER_TOKEN,
                "user": {
                    "user_id": "O1001",
                    "username": "owner",
                    "email": "owner@example.com",
                    "role": "Owner",
                    "full_name": "Ravi Menon",
                    "managed_building": "B1"
                }
            })),
        )
    } else if body["username"] == "janitor" && body["password"] == "Jan1tor!pass" {
        (
            StatusCode::OK,
            Json(json!({
                "message": "Login successful",
                "access_token": "tok-janitor",
                "user": {"user_id": "J1", "username": "janitor", "role": "Janitor"}
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid credentials",
                "message": "Username or password is incorrect"
            })),
        )
    }
}

async fn logout() -> Reply {
    (StatusCode::OK, Json(json!({"message": "Logout successful"})))
}

async fn complaints(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Reply {
    if !bearer_ok(&headers) {
        return expired();
    }
    let all = vec![
        json!({"complaint_id": "C1", "complaint_text": "Lift stuck", "priority": "High", "complaint_status": "Pending"}),
        json!({"complaint_id": "C2", "complaint_text": "Tap leaking", "priority": "Low", "complaint_status": "In Progress"}),
    ];
    let selected: Vec<Value> = all
        .into_iter()
        .filter(|c| params.get("status").map_or(true, |s| c["complaint_status"] == *s))
        .collect();
    (StatusCode::OK, Json(json!({"count": selected.len(), "complaints": selected})))
}

async fn risk_alerts(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Reply {
    if !bearer_ok(&headers) {
        return expired();
    }
    let alerts = if params.get("threshold").map(String::as_str) == Some("0.5") {
        json!([{"payment_id": "P9", "tenant_name": "Asha", "payment_amount": 15000.0, "risk_score": 0.71}])
    } else {
        json!([])
    };
    (StatusCode::OK, Json(json!({"at_risk_payments": alerts})))
}

/// Start the mock backend and return its API base URL.
async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/complaints", get(complaints))
        .route("/api/payments/risk-alerts", get(risk_alerts));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn owner_credentials() -> LoginRequest {
    LoginRequest {
        username: "owner".to_string(),
        password: "Own3r!pass".to_string(),
    }
}

#[tokio::test]
async fn test_owner_login_survives_reload() {
    let base = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(
        &base,
        SessionStore::new(FileStore::new(dir.path().to_path_buf())),
        navigator.clone(),
    )
    .unwrap();

    let landing = sign_in(&client, &owner_credentials()).await.unwrap();
    assert_eq!(landing, "/owner");
    assert_eq!(client.session().token().as_deref(), Some(OWNER_TOKEN));

    // A fresh store over the same directory stands in for a page reload.
    let reloaded = SessionStore::new(FileStore::new(dir.path().to_path_buf()));
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.role(), Some(Role::Owner));
    assert_eq!(
        reloaded.user().and_then(|u| u.managed_building),
        Some("B1".to_string())
    );
    assert_eq!(RoutePolicy::navigate(&reloaded, "/owner"), Decision::Render);
    assert_eq!(RoutePolicy::navigate(&reloaded, "/"), Decision::Redirect("/owner"));
    assert_eq!(
        RoutePolicy::navigate(&reloaded, "/admin"),
        Decision::Redirect("/unauthorized")
    );
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn test_unknown_role_lands_on_root() {
    let base = spawn_backend().await;
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(&base, SessionStore::new(MemoryStore::new()), navigator.clone()).unwrap();

    let landing = sign_in(
        &client,
        &LoginRequest {
            username: "janitor".to_string(),
            password: "Jan1tor!pass".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(landing, "/");
    let session = client.session();
    assert!(session.is_authenticated());
    assert_eq!(session.role(), None);
    assert_eq!(
        RoutePolicy::navigate(session, "/owner"),
        Decision::Redirect("/unauthorized")
    );
    // The login form stays reachable so the user can switch accounts.
    assert_eq!(RoutePolicy::navigate(session, "/login"), Decision::Render);
    assert_eq!(RoutePolicy::skip_login(session), None);
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn test_rejected_login_surfaces_backend_message() {
    let base = spawn_backend().await;
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(&base, SessionStore::new(MemoryStore::new()), navigator.clone()).unwrap();

    let err = sign_in(
        &client,
        &LoginRequest {
            username: "owner".to_string(),
            password: "wrong".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Username or password is incorrect");
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_expired_token_clears_session_on_any_endpoint() {
    let base = spawn_backend().await;
    let owner = UserInfo {
        user_id: "O1001".to_string(),
        username: "owner".to_string(),
        role: Some(Role::Owner),
        ..Default::default()
    };

    for endpoint in ["complaints", "risk-alerts"] {
        let navigator = Arc::new(RecordingNavigator::default());
        let client =
            ApiClient::new(&base, SessionStore::new(MemoryStore::new()), navigator.clone()).unwrap();
        client.session().begin("stale-token", &owner);

        let result = match endpoint {
            "complaints" => client.complaints(&ComplaintQuery::limit(10)).await.map(|_| ()),
            _ => client.payment_risk_alerts(0.5).await.map(|_| ()),
        };

        assert!(matches!(result, Err(ApiError::Unauthorized { .. })), "{endpoint}");
        assert!(!client.session().is_authenticated(), "{endpoint}");
        assert!(client.session().user().is_none(), "{endpoint}");
        assert_eq!(navigator.visited(), vec!["/login".to_string()], "{endpoint}");
        assert_eq!(
            RoutePolicy::navigate(client.session(), "/owner"),
            Decision::Redirect("/login")
        );
    }
}

#[tokio::test]
async fn test_authenticated_requests_carry_token_and_query() {
    let base = spawn_backend().await;
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(&base, SessionStore::new(MemoryStore::new()), navigator.clone()).unwrap();
    sign_in(&client, &owner_credentials()).await.unwrap();

    let all = client.complaints(&ComplaintQuery::limit(10)).await.unwrap();
    assert_eq!(all.len(), 2);

    let in_progress = client
        .complaints(&ComplaintQuery {
            status: Some(ComplaintStatus::InProgress),
            ..ComplaintQuery::limit(10)
        })
        .await
        .unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].complaint_id, "C2");

    let alerts = client.payment_risk_alerts(0.5).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].risk_percent(), 71);

    assert!(client.session().is_authenticated());
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn test_sign_out_clears_session_even_if_backend_fails() {
    let base = spawn_backend().await;
    let navigator = Arc::new(RecordingNavigator::default());
    let session = SessionStore::new(MemoryStore::new());
    let client = ApiClient::new(&base, session.clone(), navigator.clone()).unwrap();
    sign_in(&client, &owner_credentials()).await.unwrap();

    // No logout route under this prefix: the call 404s.
    let broken = ApiClient::new(&format!("{base}/v0"), session.clone(), navigator.clone()).unwrap();
    sign_out(&broken).await;

    assert!(!session.is_authenticated());
    assert_eq!(navigator.visited(), vec!["/login".to_string()]);
}
