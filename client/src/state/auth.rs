//! Auth-panel state and the in-memory session it creates.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component holds an `Option<Session>` signal and decides which
//! panel to render from it. `AuthState::finish_login` is the only place a
//! logged-in `Session` is built.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{ApiError, AuthOutcome};

pub const SUBMITTING_MESSAGE: &str = "Submitting...";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful. Please log in now.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// The currently authenticated user. Lives only as long as the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    email: String,
    logged_in: bool,
}

impl Session {
    fn new_logged_in(email: String) -> Self {
        Self { email, logged_in: true }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

/// Email of the session if it grants access to the dashboard.
pub fn dashboard_email(session: Option<&Session>) -> Option<&str> {
    session.filter(|s| s.is_logged_in()).map(Session::email)
}

/// Register/login form state: the last status message and an in-flight flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub message: String,
    pub busy: bool,
}

impl AuthState {
    /// Mark a submission as started. Returns `false` if one is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.message = SUBMITTING_MESSAGE.to_owned();
        true
    }

    pub fn finish_register(&mut self, result: Result<AuthOutcome, ApiError>) {
        self.busy = false;
        self.message = match result {
            Ok(AuthOutcome::Accepted) => REGISTER_SUCCESS_MESSAGE.to_owned(),
            Ok(AuthOutcome::Rejected { message }) => message.unwrap_or_else(|| REGISTER_FAILED_MESSAGE.to_owned()),
            Err(_) => REGISTER_FAILED_MESSAGE.to_owned(),
        };
    }

    /// Apply a login result. On acceptance, returns the new session for
    /// `email`, which must be the address captured when the form was submitted.
    pub fn finish_login(&mut self, email: String, result: Result<AuthOutcome, ApiError>) -> Option<Session> {
        self.busy = false;
        match result {
            Ok(AuthOutcome::Accepted) => {
                self.message = LOGIN_SUCCESS_MESSAGE.to_owned();
                Some(Session::new_logged_in(email))
            }
            Ok(AuthOutcome::Rejected { message }) => {
                self.message = message.unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_owned());
                None
            }
            Err(_) => {
                self.message = LOGIN_FAILED_MESSAGE.to_owned();
                None
            }
        }
    }
}
