//! Movie list state.
//!
//! # Design
//! - A failed refresh keeps whatever list is already on screen.
//! - Favorite membership is not cached here; the view asks the session.

use myflix_api_models::Movie;

use crate::core::phase::RequestPhase;
use crate::core::toast::Notice;
use crate::error::ApiResult;
use crate::features::movies::dialogs::InfoDialog;

/// Movie list screen state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieListState {
    /// Movies currently displayed.
    pub movies: Vec<Movie>,
    /// Load lifecycle.
    pub phase: RequestPhase,
    /// Open informational dialog, if any.
    pub dialog: Option<InfoDialog>,
}

impl MovieListState {
    /// Start a (re)load. Returns `false` when one is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.phase.is_pending() {
            return false;
        }
        self.phase = RequestPhase::Pending;
        true
    }

    /// Apply a load result; returns a toast on failure.
    pub fn finish_load(&mut self, result: ApiResult<Vec<Movie>>) -> Option<Notice> {
        match result {
            Ok(movies) => {
                self.movies = movies;
                self.phase = RequestPhase::Succeeded;
                None
            }
            Err(err) => {
                self.phase.fail(&err);
                Some(Notice::error(err.to_string()))
            }
        }
    }

    /// Movie by identifier.
    #[must_use]
    pub fn movie(&self, movie_id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == movie_id)
    }

    /// Show an informational dialog.
    pub fn open_dialog(&mut self, dialog: InfoDialog) {
        self.dialog = Some(dialog);
    }

    /// Close the informational dialog.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }
}
