//! Profile Loader and logout.
//!
//! This is the only place a stored token is invalidated on server feedback:
//! any profile-fetch failure clears the store before the caller navigates to
//! the login entry point. No message is shown for it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::guard::AppRoute;
use super::store::SessionStore;
use crate::net::api::AuthApi;
use crate::net::types::UserProfile;

/// Result of entering the protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileOutcome {
    Loaded(UserProfile),
    /// The session was cleared; navigate to the carried route.
    Invalidated(AppRoute),
}

/// Fetch the profile with the stored bearer token.
///
/// A missing token or any rejection (unauthorized, network, server error,
/// malformed body) clears the store and yields
/// [`ProfileOutcome::Invalidated`].
pub async fn load_profile(api: &dyn AuthApi, store: &dyn SessionStore) -> ProfileOutcome {
    let Some(token) = store.get_token() else {
        log::warn!("profile requested without a stored session");
        return invalidate(store);
    };
    match api.fetch_profile(&token).await {
        Ok(profile) => ProfileOutcome::Loaded(profile),
        Err(e) => {
            log::warn!("profile fetch failed, invalidating session: {e}");
            invalidate(store)
        }
    }
}

fn invalidate(store: &dyn SessionStore) -> ProfileOutcome {
    store.clear_token();
    ProfileOutcome::Invalidated(AppRoute::Login)
}

/// Clear the session unconditionally and return the login entry point.
/// Calling it with no stored token is a no-op clear.
pub fn logout(store: &dyn SessionStore) -> AppRoute {
    store.clear_token();
    log::info!("logged out");
    AppRoute::Login
}
