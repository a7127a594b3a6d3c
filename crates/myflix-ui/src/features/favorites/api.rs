//! Favorite toggle flow.

use crate::core::toast::Notice;
use crate::error::{ApiError, ApiResult};
use crate::services::api::ApiClient;

/// Which way a toggle went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteChange {
    /// The movie is now a favorite.
    Added,
    /// The movie is no longer a favorite.
    Removed,
}

impl FavoriteChange {
    /// Toast confirming the change.
    #[must_use]
    pub fn notice(self) -> Notice {
        match self {
            Self::Added => Notice::success("Added to favorites"),
            Self::Removed => Notice::info("Removed from favorites"),
        }
    }
}

/// Add the movie if it is not a favorite yet, otherwise remove it.
///
/// # Errors
/// `UserNotFound` without a session; otherwise the gateway's error.
pub async fn toggle_favorite(client: &ApiClient, movie_id: &str) -> ApiResult<FavoriteChange> {
    let user = client.session().get().ok_or(ApiError::UserNotFound)?;
    if user.has_favorite(movie_id) {
        client.remove_favorite(&user.username, movie_id).await?;
        Ok(FavoriteChange::Removed)
    } else {
        client.add_favorite(&user.username, movie_id).await?;
        Ok(FavoriteChange::Added)
    }
}

/// Remove the movie from the session user's favorites.
///
/// # Errors
/// `UserNotFound` without a session; otherwise the gateway's error.
pub async fn remove_favorite(client: &ApiClient, movie_id: &str) -> ApiResult<()> {
    let user = client.session().get().ok_or(ApiError::UserNotFound)?;
    client.remove_favorite(&user.username, movie_id).await?;
    Ok(())
}
