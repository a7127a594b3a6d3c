//! Profile screen state.

use myflix_api_models::{BIRTHDAY_FORMAT, Movie, User, UserUpdate};

use crate::core::phase::{RequestPhase, SubmitRejected};
use crate::core::toast::Notice;
use crate::error::ApiResult;
use crate::features::registration::state::{parse_birthday, parse_email};

/// Text shown after a successful profile edit.
pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
/// Text shown after the account is deleted.
pub const ACCOUNT_DELETED: &str = "Account deleted.";
/// Confirmation prompt shown before deleting the account.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete your account?";

/// Editable profile fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Username input.
    pub username: String,
    /// New password; blank keeps the current one.
    pub password: String,
    /// Email input.
    pub email: String,
    /// Birthday input (`YYYY-MM-DD`).
    pub birthday: String,
}

impl ProfileForm {
    /// Prefill the form from a profile.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            password: String::new(),
            email: user.email.clone().unwrap_or_default(),
            birthday: user
                .birthday_date()
                .map(|date| date.format(BIRTHDAY_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }

    /// Convert the inputs into an update payload.
    ///
    /// # Errors
    /// [`SubmitRejected::Invalid`] describing the first invalid field.
    pub fn to_update(&self) -> Result<UserUpdate, SubmitRejected> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(SubmitRejected::invalid("Username is required"));
        }
        let password = if self.password.is_empty() {
            None
        } else {
            Some(self.password.clone())
        };
        Ok(UserUpdate {
            username: username.to_string(),
            password,
            email: parse_email(&self.email)?,
            birthday: parse_birthday(&self.birthday)?,
        })
    }
}

/// Account deletion steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeletionStep {
    /// No deletion requested.
    #[default]
    Idle,
    /// Waiting for the user to confirm.
    Confirming,
    /// Delete request in flight.
    Pending,
    /// Account deleted; the session is gone.
    Deleted,
}

/// Profile screen state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    /// Profile as last confirmed by the server.
    pub user: Option<User>,
    /// Edit form.
    pub form: ProfileForm,
    /// Favorite movies shown in the strip.
    pub favorites: Vec<Movie>,
    /// Load lifecycle.
    pub load: RequestPhase,
    /// Save lifecycle.
    pub save: RequestPhase,
    /// Deletion lifecycle.
    pub deletion: DeletionStep,
}

impl ProfileState {
    /// Screen heading, empty until the profile is loaded.
    #[must_use]
    pub fn title(&self) -> String {
        self.user
            .as_ref()
            .map(|user| format!("{}'s Profile", user.username))
            .unwrap_or_default()
    }

    /// Start loading. Returns `false` when already loading.
    pub fn begin_load(&mut self) -> bool {
        if self.load.is_pending() {
            return false;
        }
        self.load = RequestPhase::Pending;
        true
    }

    /// Apply the load result; returns a toast on failure.
    pub fn finish_load(&mut self, result: ApiResult<(User, Vec<Movie>)>) -> Option<Notice> {
        match result {
            Ok((user, movies)) => {
                self.favorites = favorite_movies(&user, movies);
                self.form = ProfileForm::from_user(&user);
                self.user = Some(user);
                self.load = RequestPhase::Succeeded;
                None
            }
            Err(err) => {
                self.load.fail(&err);
                Some(Notice::error(err.to_string()))
            }
        }
    }

    /// Validate the form and move the save to `Pending`.
    ///
    /// Returns the username the profile is currently stored under together
    /// with the update payload.
    ///
    /// # Errors
    /// [`SubmitRejected::Busy`] while saving, [`SubmitRejected::Invalid`] when
    /// the profile is not loaded or a field fails validation.
    pub fn begin_update(&mut self) -> Result<(String, UserUpdate), SubmitRejected> {
        if self.save.is_pending() {
            return Err(SubmitRejected::Busy);
        }
        let current = self
            .user
            .as_ref()
            .map(|user| user.username.clone())
            .ok_or_else(|| SubmitRejected::invalid("Profile is not loaded yet"))?;
        let update = self.form.to_update()?;
        self.save = RequestPhase::Pending;
        Ok((current, update))
    }

    /// Apply the save result and return the toast to show.
    pub fn finish_update(&mut self, result: ApiResult<User>) -> Notice {
        match result {
            Ok(user) => {
                self.form = ProfileForm::from_user(&user);
                self.user = Some(user);
                self.save = RequestPhase::Succeeded;
                Notice::success(PROFILE_UPDATED)
            }
            Err(err) => {
                self.save.fail(&err);
                Notice::error(err.to_string())
            }
        }
    }

    /// Ask for confirmation before deleting.
    pub fn request_delete(&mut self) {
        if self.deletion == DeletionStep::Idle {
            self.deletion = DeletionStep::Confirming;
        }
    }

    /// Abandon a pending confirmation.
    pub fn cancel_delete(&mut self) {
        if self.deletion == DeletionStep::Confirming {
            self.deletion = DeletionStep::Idle;
        }
    }

    /// Confirm deletion; returns the username to delete.
    pub fn confirm_delete(&mut self) -> Option<String> {
        if self.deletion != DeletionStep::Confirming {
            return None;
        }
        let username = self.user.as_ref()?.username.clone();
        self.deletion = DeletionStep::Pending;
        Some(username)
    }

    /// Apply the deletion result and return the toast to show.
    pub fn finish_delete(&mut self, result: &ApiResult<()>) -> Notice {
        match result {
            Ok(()) => {
                self.deletion = DeletionStep::Deleted;
                self.user = None;
                self.favorites.clear();
                self.form = ProfileForm::default();
                Notice::success(ACCOUNT_DELETED)
            }
            Err(err) => {
                self.deletion = DeletionStep::Idle;
                Notice::error(err.to_string())
            }
        }
    }

    /// Drop a movie from the strip after its favorite was removed.
    pub fn favorite_removed(&mut self, movie_id: &str) {
        self.favorites.retain(|movie| movie.id != movie_id);
        if let Some(user) = self.user.as_mut() {
            user.remove_favorite(movie_id);
        }
    }
}

/// Keep only the movies the user has marked as favorites, in catalog order.
#[must_use]
pub fn favorite_movies(user: &User, movies: Vec<Movie>) -> Vec<Movie> {
    movies
        .into_iter()
        .filter(|movie| user.has_favorite(&movie.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn movie(id: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            genre: None,
            director: None,
            image_path: None,
            featured: false,
        }
    }

    fn ann() -> User {
        User {
            id: Some("u1".to_string()),
            username: "ann".to_string(),
            email: Some("ann@example.com".to_string()),
            birthday: Some("1990-04-12T00:00:00.000Z".to_string()),
            favorites: vec!["m2".to_string(), "m3".to_string()],
        }
    }

    fn loaded() -> ProfileState {
        let mut state = ProfileState::default();
        assert!(state.begin_load());
        state.finish_load(Ok((ann(), vec![movie("m1"), movie("m2"), movie("m3")])));
        state
    }

    #[test]
    fn load_filters_favorites_and_prefills_form() {
        let state = loaded();
        let ids: Vec<&str> = state.favorites.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m3"]);
        assert_eq!(state.title(), "ann's Profile");
        assert_eq!(state.form.birthday, "1990-04-12");
        assert_eq!(state.form.email, "ann@example.com");
        assert!(state.form.password.is_empty());
    }

    #[test]
    fn title_is_empty_before_load() {
        assert_eq!(ProfileState::default().title(), "");
    }

    #[test]
    fn update_targets_current_username() {
        let mut state = loaded();
        state.form.username = "annie".to_string();
        let (current, update) = state.begin_update().expect("valid");
        assert_eq!(current, "ann");
        assert_eq!(update.username, "annie");
        assert_eq!(update.password, None);
        assert_eq!(state.begin_update(), Err(SubmitRejected::Busy));

        let mut renamed = ann();
        renamed.username = "annie".to_string();
        let notice = state.finish_update(Ok(renamed));
        assert_eq!(notice, Notice::success(PROFILE_UPDATED));
        assert_eq!(state.title(), "annie's Profile");
    }

    #[test]
    fn update_requires_loaded_profile() {
        let mut state = ProfileState::default();
        assert!(matches!(
            state.begin_update(),
            Err(SubmitRejected::Invalid(_))
        ));
    }

    #[test]
    fn deletion_requires_confirmation() {
        let mut state = loaded();
        assert_eq!(state.confirm_delete(), None);
        state.request_delete();
        state.cancel_delete();
        assert_eq!(state.deletion, DeletionStep::Idle);

        state.request_delete();
        assert_eq!(state.confirm_delete().as_deref(), Some("ann"));
        assert_eq!(state.deletion, DeletionStep::Pending);

        let notice = state.finish_delete(&Ok(()));
        assert_eq!(notice, Notice::success(ACCOUNT_DELETED));
        assert_eq!(state.deletion, DeletionStep::Deleted);
        assert!(state.user.is_none());
    }

    #[test]
    fn failed_deletion_returns_to_idle() {
        let mut state = loaded();
        state.request_delete();
        state.confirm_delete();
        state.finish_delete(&Err(ApiError::RequestFailed {
            operation: "delete_user",
            status: Some(500),
        }));
        assert_eq!(state.deletion, DeletionStep::Idle);
        assert!(state.user.is_some());
    }

    #[test]
    fn removed_favorite_leaves_the_strip() {
        let mut state = loaded();
        state.favorite_removed("m2");
        let ids: Vec<&str> = state.favorites.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m3"]);
        assert!(!state.user.as_ref().is_some_and(|u| u.has_favorite("m2")));
    }
}
