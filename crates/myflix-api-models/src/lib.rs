#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Shared HTTP DTOs for the myFlix public API.
//!
//! The remote service is loosely specified, so every type here names the
//! fields the client depends on and tolerates the capitalised spellings the
//! service has used historically. Anything the client does not read is
//! ignored during decoding.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for birthdays on the wire and in forms.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Movie entry returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Stable movie identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title; also the lookup key for `movies/{title}`.
    #[serde(alias = "Title")]
    pub title: String,
    /// Synopsis text.
    #[serde(default, alias = "Description")]
    pub description: String,
    /// Genre the movie is filed under.
    #[serde(default, alias = "Genre")]
    pub genre: Option<Genre>,
    /// Director credited for the movie.
    #[serde(default, alias = "Director")]
    pub director: Option<Director>,
    /// Poster image reference.
    #[serde(default, alias = "ImagePath")]
    pub image_path: Option<String>,
    /// Whether the catalog highlights the movie.
    #[serde(default, alias = "Featured")]
    pub featured: bool,
}

/// Genre details, embedded in movies and returned by `genres/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// Genre name.
    #[serde(alias = "Name")]
    pub name: String,
    /// Genre description.
    #[serde(default, alias = "Description")]
    pub description: String,
}

/// Director details, embedded in movies and returned by `directors/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Director {
    /// Director name.
    #[serde(alias = "Name")]
    pub name: String,
    /// Short biography.
    #[serde(default, alias = "Bio")]
    pub bio: String,
    /// Birth date or year as sent by the service.
    #[serde(default, alias = "Birth")]
    pub birth: Option<String>,
    /// Death date or year as sent by the service.
    #[serde(default, alias = "Death")]
    pub death: Option<String>,
}

impl Director {
    /// Render the known birth/death years, e.g. `1946–2020` or `b. 1946`.
    #[must_use]
    pub fn lifespan(&self) -> Option<String> {
        let birth = self.birth.as_deref().and_then(leading_year);
        let death = self.death.as_deref().and_then(leading_year);
        match (birth, death) {
            (Some(birth), Some(death)) => Some(format!("{birth}–{death}")),
            (Some(birth), None) => Some(format!("b. {birth}")),
            (None, Some(death)) => Some(format!("d. {death}")),
            (None, None) => None,
        }
    }
}

fn leading_year(value: &str) -> Option<u16> {
    value.trim().get(..4).and_then(|year| year.parse().ok())
}

/// User profile as returned by the user endpoints and stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Server-side identifier, when the service includes it.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique username; the key for every `users/{username}` path.
    #[serde(alias = "Username")]
    pub username: String,
    /// Contact email.
    #[serde(default, alias = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Birthday as sent by the service (date or full timestamp).
    #[serde(default, alias = "Birthday", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    /// Identifiers of the user's favorite movies.
    #[serde(default, alias = "FavoriteMovies")]
    pub favorites: Vec<String>,
}

impl User {
    /// Minimal profile with only a username.
    #[must_use]
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: None,
            birthday: None,
            favorites: Vec::new(),
        }
    }

    /// Whether the movie is among the user's favorites.
    #[must_use]
    pub fn has_favorite(&self, movie_id: &str) -> bool {
        self.favorites.iter().any(|id| id == movie_id)
    }

    /// Add a favorite unless already present. Returns whether the list changed.
    pub fn add_favorite(&mut self, movie_id: &str) -> bool {
        if self.has_favorite(movie_id) {
            return false;
        }
        self.favorites.push(movie_id.to_string());
        true
    }

    /// Remove every occurrence of a favorite. Returns whether the list changed.
    pub fn remove_favorite(&mut self, movie_id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|id| id != movie_id);
        before != self.favorites.len()
    }

    /// Birthday as a calendar date, accepting `YYYY-MM-DD` or an ISO timestamp.
    #[must_use]
    pub fn birthday_date(&self) -> Option<NaiveDate> {
        let raw = self.birthday.as_deref()?.trim();
        let date = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date, BIRTHDAY_FORMAT).ok()
    }
}

/// Registration payload for `POST users`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct NewUser {
    /// Requested username.
    pub username: String,
    /// Plain-text password; hashed by the service.
    pub password: String,
    /// Contact email.
    pub email: String,
    /// Optional birthday.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("birthday", &self.birthday)
            .finish()
    }
}

/// Login payload for `POST login`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Authenticated user's profile.
    pub user: User,
    /// Bearer token for subsequent requests.
    pub token: String,
}

/// Profile edit payload for `PUT users/{username}`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct UserUpdate {
    /// New (or unchanged) username.
    pub username: String,
    /// New password; omitted to keep the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Contact email.
    pub email: String,
    /// Birthday.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

impl fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdate")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .field("birthday", &self.birthday)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn movie_accepts_capitalised_fields() {
        let movie: Movie = serde_json::from_value(json!({
            "_id": "m1",
            "Title": "Alien",
            "Description": "In space no one can hear you scream.",
            "Genre": { "Name": "Horror", "Description": "Scary." },
            "Director": { "Name": "Ridley Scott", "Bio": "English director.", "Birth": "1937" },
            "ImagePath": "alien.png",
            "Featured": true
        }))
        .expect("movie should decode");
        assert_eq!(movie.id, "m1");
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.genre.as_ref().map(|g| g.name.as_str()), Some("Horror"));
        assert_eq!(movie.image_path.as_deref(), Some("alien.png"));
        assert!(movie.featured);
    }

    #[test]
    fn movie_without_id_is_rejected() {
        let result = serde_json::from_value::<Movie>(json!({ "title": "Untitled" }));
        assert!(result.is_err());
    }

    #[test]
    fn user_defaults_missing_favorites() {
        let user: User = serde_json::from_value(json!({ "username": "ann" }))
            .expect("user should decode");
        assert!(user.favorites.is_empty());
        assert_eq!(user.id, None);
    }

    #[test]
    fn favorites_are_kept_unique() {
        let mut user = User::named("ann");
        assert!(user.add_favorite("m1"));
        assert!(!user.add_favorite("m1"));
        assert_eq!(user.favorites, vec!["m1".to_string()]);
        assert!(user.remove_favorite("m1"));
        assert!(!user.remove_favorite("m1"));
        assert!(user.favorites.is_empty());
    }

    #[test]
    fn birthday_parses_dates_and_timestamps() {
        let mut user = User::named("ann");
        user.birthday = Some("1990-04-12T00:00:00.000Z".to_string());
        assert_eq!(user.birthday_date(), NaiveDate::from_ymd_opt(1990, 4, 12));
        user.birthday = Some("1990-04-12".to_string());
        assert_eq!(user.birthday_date(), NaiveDate::from_ymd_opt(1990, 4, 12));
        user.birthday = Some("someday".to_string());
        assert_eq!(user.birthday_date(), None);
    }

    #[test]
    fn update_omits_blank_password() {
        let update = UserUpdate {
            username: "ann".to_string(),
            password: None,
            email: "ann@example.com".to_string(),
            birthday: NaiveDate::from_ymd_opt(1990, 4, 12),
        };
        let value = serde_json::to_value(&update).expect("serialize");
        assert_eq!(
            value,
            json!({ "username": "ann", "email": "ann@example.com", "birthday": "1990-04-12" })
        );
    }

    #[test]
    fn director_lifespan_formats_known_years() {
        let mut director = Director {
            name: "Ridley Scott".to_string(),
            bio: String::new(),
            birth: Some("1937-11-30".to_string()),
            death: None,
        };
        assert_eq!(director.lifespan().as_deref(), Some("b. 1937"));
        director.death = Some("2099".to_string());
        assert_eq!(director.lifespan().as_deref(), Some("1937–2099"));
        director.birth = None;
        director.death = None;
        assert_eq!(director.lifespan(), None);
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let creds = Credentials {
            username: "ann".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}
