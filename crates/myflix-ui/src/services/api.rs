//! HTTP client for the myFlix REST API.
//!
//! # Design
//! - Every remote call in the app goes through [`ApiClient`].
//! - The bearer token is read from the session on each authenticated call.
//! - Any transport failure or non-2xx status becomes `RequestFailed`; 2xx
//!   payloads are decoded into explicit types or fail with `Decode`.
//! - Favorite mutations update the stored user only after the server confirms.

use myflix_api_models::{
    Credentials, Director, Genre, LoginResponse, Movie, NewUser, User, UserUpdate,
};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::core::session::SessionStore;
use crate::error::{ApiError, ApiResult};

/// Gateway to the myFlix API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionStore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    Bearer,
    Anonymous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FavoriteChange {
    Add,
    Remove,
}

impl ApiClient {
    /// Build a client for the configured API using the given session.
    ///
    /// # Errors
    /// Returns [`ApiError::RequestFailed`] when the HTTP client cannot be built.
    pub fn new(config: &ClientConfig, session: SessionStore) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| {
                warn!(error = %err, "failed to build HTTP client");
                ApiError::request_failed("build_client", None)
            })?;
        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            session,
        })
    }

    /// Session store shared with the screens.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Create an account. Sent without credentials.
    ///
    /// # Errors
    /// `RequestFailed` on any transport failure, `Decode` on a malformed body.
    pub async fn register(&self, new_user: &NewUser) -> ApiResult<User> {
        let request = self.request(Method::POST, &["users"], Auth::Anonymous)?;
        self.send_json("register", request.json(new_user)).await
    }

    /// Exchange credentials for a user profile and bearer token.
    ///
    /// The caller decides whether to persist the result.
    ///
    /// # Errors
    /// `RequestFailed` on bad credentials or transport failure.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let request = self.request(Method::POST, &["login"], Auth::Anonymous)?;
        self.send_json("login", request.json(credentials)).await
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    /// `RequestFailed` when unauthenticated or on transport failure.
    pub async fn list_movies(&self) -> ApiResult<Vec<Movie>> {
        let request = self.request(Method::GET, &["movies"], Auth::Bearer)?;
        self.send_json("list_movies", request).await
    }

    /// Fetch one movie by title.
    ///
    /// # Errors
    /// `RequestFailed` when unauthenticated, unknown, or on transport failure.
    pub async fn get_movie(&self, title: &str) -> ApiResult<Movie> {
        let request = self.request(Method::GET, &["movies", title], Auth::Bearer)?;
        self.send_json("get_movie", request).await
    }

    /// Fetch a genre by name.
    ///
    /// # Errors
    /// `RequestFailed` when unauthenticated, unknown, or on transport failure.
    pub async fn get_genre(&self, name: &str) -> ApiResult<Genre> {
        let request = self.request(Method::GET, &["genres", name], Auth::Bearer)?;
        self.send_json("get_genre", request).await
    }

    /// Fetch a director by name.
    ///
    /// # Errors
    /// `RequestFailed` when unauthenticated, unknown, or on transport failure.
    pub async fn get_director(&self, name: &str) -> ApiResult<Director> {
        let request = self.request(Method::GET, &["directors", name], Auth::Bearer)?;
        self.send_json("get_director", request).await
    }

    /// Fetch a user profile by username.
    ///
    /// # Errors
    /// `RequestFailed` when unauthenticated, unknown, or on transport failure.
    pub async fn get_user(&self, username: &str) -> ApiResult<User> {
        let request = self.request(Method::GET, &["users", username], Auth::Bearer)?;
        self.send_json("get_user", request).await
    }

    /// Fetch the profile of the user stored in the session.
    ///
    /// # Errors
    /// `UserNotFound` without a stored user (no request is made), otherwise
    /// as [`ApiClient::get_user`].
    pub async fn get_current_user(&self) -> ApiResult<User> {
        let username = self
            .session
            .get()
            .map(|user| user.username)
            .filter(|username| !username.trim().is_empty())
            .ok_or(ApiError::UserNotFound)?;
        self.get_user(&username).await
    }

    /// Replace a user's profile fields.
    ///
    /// # Errors
    /// `RequestFailed` on rejection or transport failure.
    pub async fn update_user(&self, username: &str, update: &UserUpdate) -> ApiResult<User> {
        let request = self.request(Method::PUT, &["users", username], Auth::Bearer)?;
        self.send_json("update_user", request.json(update)).await
    }

    /// Delete a user's account. The session is left to the caller.
    ///
    /// # Errors
    /// `RequestFailed` on rejection or transport failure.
    pub async fn delete_user(&self, username: &str) -> ApiResult<()> {
        let request = self.request(Method::DELETE, &["users", username], Auth::Bearer)?;
        self.send_discarding("delete_user", request).await
    }

    /// Add a movie to the user's favorites, then mirror it into the session.
    ///
    /// The stored copy is updated as soon as the server answers with a 2xx,
    /// before the response body is decoded, and only when `username` is the
    /// session's user.
    ///
    /// # Errors
    /// `RequestFailed` leaves the stored favorites untouched; `Storage` means
    /// the server accepted the change but the session write failed.
    pub async fn add_favorite(&self, username: &str, movie_id: &str) -> ApiResult<User> {
        self.change_favorite(username, movie_id, FavoriteChange::Add)
            .await
    }

    /// Remove a movie from the user's favorites, then mirror it into the session.
    ///
    /// # Errors
    /// As [`ApiClient::add_favorite`].
    pub async fn remove_favorite(&self, username: &str, movie_id: &str) -> ApiResult<User> {
        self.change_favorite(username, movie_id, FavoriteChange::Remove)
            .await
    }

    /// Whether the stored user has the movie as a favorite. Never calls the network.
    #[must_use]
    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.session
            .get()
            .is_some_and(|user| user.has_favorite(movie_id))
    }

    async fn change_favorite(
        &self,
        username: &str,
        movie_id: &str,
        change: FavoriteChange,
    ) -> ApiResult<User> {
        let (method, operation) = match change {
            FavoriteChange::Add => (Method::POST, "add_favorite"),
            FavoriteChange::Remove => (Method::DELETE, "remove_favorite"),
        };
        let request = self.request(
            method,
            &["users", username, "movies", movie_id],
            Auth::Bearer,
        )?;
        let body = self.send(operation, request).await?;

        match self.session.get() {
            Some(mut stored) if stored.username == username => {
                match change {
                    FavoriteChange::Add => stored.add_favorite(movie_id),
                    FavoriteChange::Remove => stored.remove_favorite(movie_id),
                };
                self.session
                    .save_user(&stored)
                    .map_err(|source| ApiError::Storage { operation, source })?;
            }
            Some(_) => {
                warn!(operation, username, "favorite confirmed for a user other than the session's");
            }
            None => warn!(operation, "favorite confirmed without a stored session"),
        }
        decode(operation, &body)
    }

    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidEndpoint {
                base: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str], auth: Auth) -> ApiResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        let mut request = self.http.request(method, url);
        if auth == Auth::Bearer {
            if let Some(token) = self.session.token() {
                request = request.bearer_auth(token);
            }
        }
        Ok(request)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let body = self.send(operation, request).await?;
        decode(operation, &body)
    }

    async fn send_discarding(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> ApiResult<()> {
        self.send(operation, request).await.map(drop)
    }

    async fn send(&self, operation: &'static str, request: RequestBuilder) -> ApiResult<Vec<u8>> {
        debug!(operation, "sending request");
        let response = request.send().await.map_err(|err| {
            warn!(operation, error = %err, "request did not complete");
            ApiError::request_failed(operation, None)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                operation,
                status = status.as_u16(),
                body = %body.trim(),
                "request rejected"
            );
            return Err(ApiError::request_failed(operation, Some(status.as_u16())));
        }

        let bytes = response.bytes().await.map_err(|err| {
            warn!(operation, error = %err, "response body could not be read");
            ApiError::request_failed(operation, Some(status.as_u16()))
        })?;
        debug!(operation, status = status.as_u16(), "request succeeded");
        Ok(bytes.to_vec())
    }
}

fn decode<T: DeserializeOwned>(operation: &'static str, body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|source| {
        warn!(operation, error = %source, "response payload did not decode");
        ApiError::Decode { operation, source }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        let config = ClientConfig::new(base).expect("config");
        ApiClient::new(&config, SessionStore::in_memory()).expect("client")
    }

    #[test]
    fn endpoint_joins_and_encodes_segments() {
        let client = client("https://api.example.com/");
        let url = client.endpoint(&["movies", "The Thing"]).expect("url");
        assert_eq!(url.as_str(), "https://api.example.com/movies/The%20Thing");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let client = client("https://api.example.com/v1/");
        let url = client
            .endpoint(&["users", "ann", "movies", "m1"])
            .expect("url");
        assert_eq!(url.as_str(), "https://api.example.com/v1/users/ann/movies/m1");
    }

    #[test]
    fn endpoint_handles_base_without_trailing_slash() {
        let client = client("http://localhost:8080");
        let url = client.endpoint(&["login"]).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8080/login");
    }

    #[test]
    fn endpoint_escapes_slashes_inside_segments() {
        let client = client("https://api.example.com/");
        let url = client.endpoint(&["movies", "AC/DC"]).expect("url");
        assert_eq!(url.as_str(), "https://api.example.com/movies/AC%2FDC");
    }

    #[test]
    fn is_favorite_reads_session_only() {
        let client = client("https://api.example.com/");
        assert!(!client.is_favorite("m1"));
        let mut user = User::named("ann");
        user.add_favorite("m1");
        client.session().set(&user, "t1").expect("set");
        assert!(client.is_favorite("m1"));
        assert!(!client.is_favorite("m2"));
    }
}
