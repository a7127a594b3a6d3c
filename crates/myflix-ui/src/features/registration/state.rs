//! Registration form state.
//!
//! # Design
//! - Keep inputs as strings for lossless editing; parse only on submit.
//! - Validate what the service would reject anyway so the user gets a
//!   specific message instead of the generic failure.

use chrono::NaiveDate;
use myflix_api_models::{BIRTHDAY_FORMAT, NewUser, User};

use crate::core::phase::{RequestPhase, SubmitRejected};
use crate::core::toast::Notice;
use crate::error::ApiResult;

/// Text shown after a successful registration.
pub const REGISTRATION_SUCCESS: &str = "User registered successfully!";

/// Editable registration fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Requested username.
    pub username: String,
    /// Password input.
    pub password: String,
    /// Email input.
    pub email: String,
    /// Birthday input (`YYYY-MM-DD`, optional).
    pub birthday: String,
}

/// Registration dialog state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationState {
    /// Current form inputs.
    pub form: RegistrationForm,
    /// Request lifecycle.
    pub phase: RequestPhase,
}

impl RegistrationState {
    /// Validate the form and move to `Pending`.
    ///
    /// # Errors
    /// [`SubmitRejected::Busy`] while a request is in flight,
    /// [`SubmitRejected::Invalid`] when a field fails validation.
    pub fn begin(&mut self) -> Result<NewUser, SubmitRejected> {
        if self.phase.is_pending() {
            return Err(SubmitRejected::Busy);
        }
        let new_user = self.form.to_new_user()?;
        self.phase = RequestPhase::Pending;
        Ok(new_user)
    }

    /// Apply the registration result and return the toast to show.
    pub fn finish(&mut self, result: &ApiResult<User>) -> Notice {
        match result {
            Ok(_) => {
                self.phase = RequestPhase::Succeeded;
                self.form = RegistrationForm::default();
                Notice::success(REGISTRATION_SUCCESS)
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

impl RegistrationForm {
    /// Convert the inputs into a registration payload.
    ///
    /// # Errors
    /// [`SubmitRejected::Invalid`] describing the first invalid field.
    pub fn to_new_user(&self) -> Result<NewUser, SubmitRejected> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(SubmitRejected::invalid("Username is required"));
        }
        if self.password.is_empty() {
            return Err(SubmitRejected::invalid("Password is required"));
        }
        let email = parse_email(&self.email)?;
        let birthday = parse_birthday(&self.birthday)?;
        Ok(NewUser {
            username: username.to_string(),
            password: self.password.clone(),
            email,
            birthday,
        })
    }
}

pub(crate) fn parse_email(value: &str) -> Result<String, SubmitRejected> {
    let email = value.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if valid {
        Ok(email.to_string())
    } else {
        Err(SubmitRejected::invalid("Email must be a valid address"))
    }
}

pub(crate) fn parse_birthday(value: &str) -> Result<Option<NaiveDate>, SubmitRejected> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, BIRTHDAY_FORMAT)
        .map(Some)
        .map_err(|_| SubmitRejected::invalid("Birthday must be a date (YYYY-MM-DD)"))
}
