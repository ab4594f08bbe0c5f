//! # Session-expiry interceptor
//!
//! Sits on both sides of every request made by [`crate::ApiClient`]:
//!
//! - **Outgoing**: attaches `Authorization: Bearer <token>` when a token is stored.
//! - **Incoming**: on `401 Unauthorized`, whatever the endpoint, clears the
//!   session and forces navigation to the login view before the error reaches
//!   the caller. This is the only place a stale token is detected.

use std::sync::Arc;

use reqwest::{RequestBuilder, StatusCode};
use store::guard::LOGIN_PATH;
use store::{KeyValueStorage, SessionStore};

use crate::error::ApiError;

/// Forced navigation, supplied by the host application.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// A navigator that does nothing, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _path: &str) {}
}

#[derive(Clone)]
pub struct SessionInterceptor<S> {
    session: SessionStore<S>,
    navigator: Arc<dyn Navigator>,
}

impl<S: KeyValueStorage> SessionInterceptor<S> {
    pub fn new(session: SessionStore<S>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub fn on_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Inspect a response status; `Err` for anything but success.
    pub fn on_response(&self, status: StatusCode, body: &[u8]) -> Result<(), ApiError> {
        if status == StatusCode::UNAUTHORIZED {
            tracing::info!("Backend rejected the session token; signing out");
            self.session.clear();
            self.navigator.navigate(LOGIN_PATH);
        }
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_response(status.as_u16(), body))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;
    use store::{MemoryStore, Role, UserInfo};

    /// Records every forced navigation.
    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        pub(crate) visited: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.lock().unwrap().push(path.to_string());
        }
    }

    fn signed_in() -> (SessionInterceptor<MemoryStore>, Arc<RecordingNavigator>) {
        let session = SessionStore::new(MemoryStore::new());
        session.begin(
            "tok",
            &UserInfo {
                role: Some(Role::Admin),
                ..Default::default()
            },
        );
        let navigator = Arc::new(RecordingNavigator::default());
        (SessionInterceptor::new(session, navigator.clone()), navigator)
    }

    #[test]
    fn test_unauthorized_clears_session_and_redirects() {
        let (interceptor, navigator) = signed_in();
        let err = interceptor
            .on_response(StatusCode::UNAUTHORIZED, br#"{"msg": "Token has expired"}"#)
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert!(!interceptor.session().is_authenticated());
        assert!(interceptor.session().user().is_none());
        assert_eq!(*navigator.visited.lock().unwrap(), vec![LOGIN_PATH.to_string()]);
    }

    #[test]
    fn test_other_failures_keep_session() {
        let (interceptor, navigator) = signed_in();
        for status in [StatusCode::FORBIDDEN, StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR] {
            let err = interceptor.on_response(status, b"{}").unwrap_err();
            assert!(matches!(err, ApiError::Status { .. }));
        }
        assert!(interceptor.session().is_authenticated());
        assert!(navigator.visited.lock().unwrap().is_empty());
    }

    #[test]
    fn test_success_passes_through() {
        let (interceptor, _) = signed_in();
        assert!(interceptor.on_response(StatusCode::OK, b"{}").is_ok());
        assert!(interceptor.on_response(StatusCode::CREATED, b"{}").is_ok());
    }

    #[test]
    fn test_bearer_attached_only_with_token() {
        let (interceptor, _) = signed_in();
        let http = reqwest::Client::new();

        let request = interceptor
            .on_request(http.get("http://localhost/api/complaints"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer tok"
        );

        interceptor.session().clear();
        let request = interceptor
            .on_request(http.get("http://localhost/api/complaints"))
            .build()
            .unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }
}
