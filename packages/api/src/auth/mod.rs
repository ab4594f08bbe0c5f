//! Sign-in, sign-out and registration flows built on [`ApiClient`].

pub mod password;

use store::guard::{LOGIN_PATH, ROOT_PATH};
use store::KeyValueStorage;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, MessageResponse, RegistrationForm};

/// Log in and persist the session. Returns the path to navigate to next.
///
/// A user without a recognised role lands on `/`, where the guard decides.
pub async fn sign_in<S: KeyValueStorage>(
    client: &ApiClient<S>,
    credentials: &LoginRequest,
) -> Result<&'static str, ApiError> {
    let response = client.login(credentials).await?;
    client.session().begin(&response.access_token, &response.user);
    tracing::info!(username = %response.user.username, role = ?response.user.role, "Signed in");
    Ok(response.user.role.map_or(ROOT_PATH, |role| role.dashboard_path()))
}

/// Notify the backend, then drop the local session regardless of the outcome.
pub async fn sign_out<S: KeyValueStorage>(client: &ApiClient<S>) {
    if let Err(e) = client.logout().await {
        tracing::warn!("Logout request failed: {e}");
    }
    client.session().clear();
    client.navigator().navigate(LOGIN_PATH);
}

/// Validate the form locally, then submit it.
pub async fn register<S: KeyValueStorage>(
    client: &ApiClient<S>,
    form: RegistrationForm,
) -> Result<MessageResponse, ApiError> {
    let request = form.into_request()?;
    client.register(&request).await
}
