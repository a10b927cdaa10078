//! Callback Resolver: completes an external-provider round trip.
//!
//! The server redirects the browser to `/callback?token=...` once the
//! provider has vouched for the user. The resolver commits the token and
//! picks the next route. It runs once per distinct landing, not on every
//! render.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use super::guard::AppRoute;
use super::store::SessionStore;

/// Query parameter carrying the issued token.
pub const TOKEN_PARAM: &str = "token";

/// Commit `token_param` if it is present and non-empty, then return the route
/// to navigate to. An absent token leaves the store untouched.
pub fn resolve_callback(store: &dyn SessionStore, token_param: Option<&str>) -> AppRoute {
    match token_param.filter(|t| !t.is_empty()) {
        Some(token) => {
            store.set_token(token);
            log::info!("external login completed; session stored");
            AppRoute::PROTECTED_ENTRY
        }
        None => {
            log::warn!("callback landed without a token");
            AppRoute::Login
        }
    }
}

/// One-shot wrapper around [`resolve_callback`], keyed by the landing's
/// search string.
#[derive(Clone, Debug, Default)]
pub struct CallbackResolver {
    last_landing: Option<String>,
}

impl CallbackResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a landing. Returns `None` when `search` is the landing that was
    /// already resolved.
    pub fn resolve(
        &mut self,
        store: &dyn SessionStore,
        search: &str,
        token_param: Option<&str>,
    ) -> Option<AppRoute> {
        if self.last_landing.as_deref() == Some(search) {
            return None;
        }
        self.last_landing = Some(search.to_owned());
        Some(resolve_callback(store, token_param))
    }
}
