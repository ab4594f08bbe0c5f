//! Error type shared by every API call.

use serde::Deserialize;

/// Message shown when the backend rejects the token without saying why.
pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid API base URL: {0}")]
    InvalidUrl(String),
    /// The backend answered 401. The session has already been cleared.
    #[error("{message}")]
    Unauthorized { message: String },
    /// Any other non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Build the error for a failed response from its status and raw body.
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        let message = ErrorBody::message_from(body);
        if status == 401 {
            ApiError::Unauthorized {
                message: message.unwrap_or_else(|| SESSION_EXPIRED.to_string()),
            }
        } else {
            ApiError::Status {
                status,
                message: message.unwrap_or_else(|| format!("Request failed with status {status}")),
            }
        }
    }
}

/// Rejected form input, caught before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password does not meet security requirements")]
    WeakPassword,
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// The `{"error": ..., "message": ...}` body the backend attaches to failures.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn message_from(body: &[u8]) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
        parsed
            .message
            .filter(|m| !m.is_empty())
            .or(parsed.error.filter(|e| !e.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_preferred() {
        let body = br#"{"error": "Invalid credentials", "message": "Username or password is incorrect"}"#;
        let err = ApiError::from_response(401, body);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Username or password is incorrect");

        let err = ApiError::from_response(403, br#"{"error": "Unauthorized"}"#);
        assert_eq!(err.to_string(), "Unauthorized");
        assert!(matches!(err, ApiError::Status { status: 403, .. }));
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(ApiError::from_response(401, b"").to_string(), SESSION_EXPIRED);
        assert_eq!(
            ApiError::from_response(500, b"<html>oops</html>").to_string(),
            "Request failed with status 500"
        );
    }
}
