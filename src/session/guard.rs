//! Route Guard: decides, per navigation, whether a route may render.
//!
//! The decision is a pure function of the stored token and the target route.
//! The router calls it on every location change; nothing is cached between
//! navigations, so a token cleared elsewhere is observed on the next one.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Client-side routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    Callback,
    Dashboard,
    NotFound,
}

impl AppRoute {
    /// Protected entry point reached after a successful login.
    pub const PROTECTED_ENTRY: Self = Self::Dashboard;

    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Self::Root,
            "/login" => Self::Login,
            "/callback" => Self::Callback,
            "/dashboard" => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Callback => "/callback",
            Self::Dashboard => "/dashboard",
            Self::NotFound => "/404",
        }
    }

    /// Routes that require a stored token.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// What the router should do for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationIntent {
    RenderProtected,
    RenderPublic,
    RedirectToLogin,
}

/// Guard decision for `route` given the currently stored token.
#[must_use]
pub fn evaluate(token: Option<&str>, route: AppRoute) -> NavigationIntent {
    match route {
        AppRoute::Root => NavigationIntent::RedirectToLogin,
        r if r.is_protected() => {
            if token.is_some() {
                NavigationIntent::RenderProtected
            } else {
                NavigationIntent::RedirectToLogin
            }
        }
        _ => NavigationIntent::RenderPublic,
    }
}

/// Guard state shown by the protected wrapper.
///
/// `Checking` holds only from mount until the first store read; later
/// location changes move directly between the settled states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Checking,
    Authenticated,
    Unauthenticated,
    /// Route needs no session; the token was not consulted.
    Public,
}

impl GuardState {
    /// Settled state for `route` after reading the store.
    #[must_use]
    pub fn settle(token: Option<&str>, route: AppRoute) -> Self {
        match evaluate(token, route) {
            NavigationIntent::RenderProtected => Self::Authenticated,
            NavigationIntent::RenderPublic => Self::Public,
            NavigationIntent::RedirectToLogin => Self::Unauthenticated,
        }
    }

    /// Settled state for the router's current pathname.
    #[must_use]
    pub fn at_path(token: Option<&str>, pathname: &str) -> Self {
        Self::settle(token, AppRoute::from_path(pathname))
    }

    #[must_use]
    pub fn may_render(self) -> bool {
        matches!(self, Self::Authenticated | Self::Public)
    }
}
