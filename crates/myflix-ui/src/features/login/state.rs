//! Login form state.

use myflix_api_models::{Credentials, User};

use crate::core::phase::{RequestPhase, SubmitRejected};
use crate::core::toast::Notice;
use crate::error::ApiResult;

/// Text shown after a successful login.
pub const LOGIN_SUCCESS: &str = "Login successful!";

/// Editable login fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Username input.
    pub username: String,
    /// Password input.
    pub password: String,
}

/// Login dialog state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    /// Current form inputs.
    pub form: LoginForm,
    /// Request lifecycle.
    pub phase: RequestPhase,
}

impl LoginState {
    /// Validate the form and move to `Pending`.
    ///
    /// # Errors
    /// [`SubmitRejected::Busy`] while a login is in flight,
    /// [`SubmitRejected::Invalid`] for blank fields.
    pub fn begin(&mut self) -> Result<Credentials, SubmitRejected> {
        if self.phase.is_pending() {
            return Err(SubmitRejected::Busy);
        }
        let username = self.form.username.trim();
        if username.is_empty() {
            return Err(SubmitRejected::invalid("Username is required"));
        }
        if self.form.password.is_empty() {
            return Err(SubmitRejected::invalid("Password is required"));
        }
        self.phase = RequestPhase::Pending;
        Ok(Credentials {
            username: username.to_string(),
            password: self.form.password.clone(),
        })
    }

    /// Apply the login result and return the toast to show.
    pub fn finish(&mut self, result: &ApiResult<User>) -> Notice {
        match result {
            Ok(_) => {
                self.phase = RequestPhase::Succeeded;
                self.form.password.clear();
                Notice::success(LOGIN_SUCCESS)
            }
            Err(err) => {
                self.phase.fail(err);
                Notice::error(err.to_string())
            }
        }
    }

    /// Whether the dialog should close.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == RequestPhase::Succeeded
    }
}
