//! Login form state: mode, transient credentials, error, and the in-flight
//! gate.
//!
//! DESIGN
//! ======
//! `loading` is the single gate for both outcomes of a submission. While it
//! is set, `begin_submit` refuses to start another one, so two local
//! submissions never race for the session slot.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::error::{AuthError, redirect_error_message};
use crate::session::guard::AppRoute;
use crate::session::submit::{AuthMode, Credentials};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl LoginFormState {
    /// Switch login/register. Clears the error and the register-only field.
    pub fn toggle_mode(&mut self) {
        if self.loading {
            return;
        }
        self.mode = self.mode.toggled();
        self.error = None;
        self.name.clear();
    }

    /// Credentials for the current mode.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
            name: (self.mode == AuthMode::Register).then(|| self.name.clone()),
        }
    }

    /// Start a submission. Returns `None` while another one is in flight.
    pub fn begin_submit(&mut self) -> Option<(AuthMode, Credentials)> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.loading = true;
        Some((self.mode, self.credentials()))
    }

    /// Settle a submission. Success drops the credentials; failure shows the
    /// mapped message and keeps them for another attempt.
    pub fn finish_submit(&mut self, result: &Result<AppRoute, AuthError>) {
        self.loading = false;
        match result {
            Ok(_) => {
                self.email.clear();
                self.password.clear();
                self.name.clear();
            }
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    /// Surface a failure reported through `/login?error=<code>`.
    pub fn apply_error_param(&mut self, raw: Option<&str>) {
        if let Some(message) = redirect_error_message(raw) {
            self.error = Some(message.to_owned());
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Please wait..." } else { self.mode.submit_label() }
    }
}
