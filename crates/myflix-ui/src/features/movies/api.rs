//! Movie list flows.

use myflix_api_models::Movie;

use crate::error::ApiResult;
use crate::services::api::ApiClient;

/// Fetch the catalog for display.
///
/// # Errors
/// `RequestFailed` when the catalog cannot be fetched.
pub async fn load_movies(client: &ApiClient) -> ApiResult<Vec<Movie>> {
    client.list_movies().await
}
