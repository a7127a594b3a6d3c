//! Login flow.

use myflix_api_models::{Credentials, LoginResponse, User};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::services::api::ApiClient;

/// Log in and persist the returned user and token into the session.
///
/// # Errors
/// `RequestFailed` from the gateway, or `Storage` when the session write fails.
pub async fn log_in(client: &ApiClient, credentials: &Credentials) -> ApiResult<User> {
    let LoginResponse { user, token } = client.login(credentials).await?;
    client
        .session()
        .set(&user, &token)
        .map_err(|source| ApiError::Storage {
            operation: "login",
            source,
        })?;
    info!(username = %user.username, "logged in");
    Ok(user)
}
