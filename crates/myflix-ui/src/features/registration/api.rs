//! Registration flow.

use myflix_api_models::{NewUser, User};
use tracing::info;

use crate::error::ApiResult;
use crate::services::api::ApiClient;

/// Create the account. The session is not touched; the user logs in next.
///
/// # Errors
/// `RequestFailed` when the service rejects the registration.
pub async fn register(client: &ApiClient, new_user: &NewUser) -> ApiResult<User> {
    let user = client.register(new_user).await?;
    info!(username = %user.username, "registered");
    Ok(user)
}
