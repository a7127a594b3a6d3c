//! Profile flows.

use myflix_api_models::{Movie, User, UserUpdate};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::services::api::ApiClient;

/// Fetch the session user's profile and the catalog.
///
/// # Errors
/// `UserNotFound` without a session, otherwise the gateway's error.
pub async fn load_profile(client: &ApiClient) -> ApiResult<(User, Vec<Movie>)> {
    let user = client.get_current_user().await?;
    let movies = client.list_movies().await?;
    Ok((user, movies))
}

/// Save profile edits and replace the stored user with the server's copy.
///
/// # Errors
/// `RequestFailed` when rejected, `Storage` when the session write fails.
pub async fn save_profile(
    client: &ApiClient,
    current_username: &str,
    update: &UserUpdate,
) -> ApiResult<User> {
    let user = client.update_user(current_username, update).await?;
    client
        .session()
        .save_user(&user)
        .map_err(|source| ApiError::Storage {
            operation: "update_user",
            source,
        })?;
    info!(username = %user.username, "profile updated");
    Ok(user)
}

/// Delete the account, then forget the session.
///
/// The server-side deletion is not undone if clearing the session fails.
///
/// # Errors
/// `RequestFailed` when rejected; the session is kept in that case.
pub async fn delete_account(client: &ApiClient, username: &str) -> ApiResult<()> {
    client.delete_user(username).await?;
    client.session().clear();
    info!(username, "account deleted");
    Ok(())
}
