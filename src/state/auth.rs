//! Auth-session state for the protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the dashboard for its lifetime: the profile is fetched fresh on
//! every entry and dropped on navigation away.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;
use crate::session::profile::ProfileOutcome;

/// Profile and loading status of the protected view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub profile: Option<UserProfile>,
    pub loading: bool,
}

impl AuthState {
    /// State on entry, before the profile request resolves.
    #[must_use]
    pub fn loading() -> Self {
        Self { profile: None, loading: true }
    }

    /// Fold a profile outcome in. Invalidation leaves no profile behind.
    pub fn apply(&mut self, outcome: &ProfileOutcome) {
        self.loading = false;
        self.profile = match outcome {
            ProfileOutcome::Loaded(profile) => Some(profile.clone()),
            ProfileOutcome::Invalidated(_) => None,
        };
    }

    /// Whether protected content may render.
    #[must_use]
    pub fn ready(&self) -> bool {
        !self.loading && self.profile.is_some()
    }
}
