//! Credential Submitter: local login/register and external-provider starts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Local submissions validate first, then call the identity server through
//! [`AuthApi`]. Only a successful response carrying a token touches the
//! [`SessionStore`]; every failure leaves session state exactly as it was.
//! External providers are a full-page navigation and mutate nothing locally.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use super::guard::AppRoute;
use super::store::SessionStore;
use crate::config::ClientConfig;
use crate::error::{ApiError, AuthError, MIN_PASSWORD_LEN, ValidationError};
use crate::net::api::{AuthApi, provider_login_url};
use crate::net::types::{LocalLoginRequest, LocalRegisterRequest, ProviderId};

/// Local form mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Welcome back",
            Self::Register => "Create your account",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
        }
    }

    /// Prompt and button text for switching to the other mode.
    #[must_use]
    pub fn toggle_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account?", "Sign Up"),
            Self::Register => ("Already have an account?", "Sign In"),
        }
    }
}

/// Transient form credentials. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn login(email: &str, password: &str) -> Self {
        Self { email: email.to_owned(), password: password.to_owned(), name: None }
    }

    #[must_use]
    pub fn register(email: &str, password: &str, name: &str) -> Self {
        Self { email: email.to_owned(), password: password.to_owned(), name: Some(name.to_owned()) }
    }
}

/// A validated request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocalAuthRequest {
    Login(LocalLoginRequest),
    Register(LocalRegisterRequest),
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    matches!(
        email.split_once('@'),
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@')
    )
}

/// Check the local-auth preconditions and build the request body.
///
/// # Errors
///
/// Returns the first failed precondition: missing email/password, malformed
/// email, password shorter than six characters, or a missing name when
/// registering.
pub fn validate(mode: AuthMode, creds: &Credentials) -> Result<LocalAuthRequest, ValidationError> {
    let email = creds.email.trim();
    if email.is_empty() || creds.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if !looks_like_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if creds.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    match mode {
        AuthMode::Login => Ok(LocalAuthRequest::Login(LocalLoginRequest {
            email: email.to_owned(),
            password: creds.password.clone(),
        })),
        AuthMode::Register => {
            let name = creds
                .name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .ok_or(ValidationError::MissingName)?;
            Ok(LocalAuthRequest::Register(LocalRegisterRequest {
                email: email.to_owned(),
                password: creds.password.clone(),
                name: name.to_owned(),
            }))
        }
    }
}

/// Submit local credentials and commit the issued token.
///
/// On success returns the protected entry point to navigate to.
///
/// # Errors
///
/// Returns [`AuthError::Validation`] without sending anything when a
/// precondition fails, [`AuthError::InvalidResponse`] when the server answers
/// 2xx without a token, and the mapped server/network failure otherwise.
pub async fn submit_local(
    api: &dyn AuthApi,
    store: &dyn SessionStore,
    mode: AuthMode,
    creds: &Credentials,
) -> Result<AppRoute, AuthError> {
    let request = validate(mode, creds)?;
    let response = match &request {
        LocalAuthRequest::Login(body) => api.local_login(body).await,
        LocalAuthRequest::Register(body) => api.local_register(body).await,
    };
    let response = response.map_err(|e| {
        log::warn!("local {} failed: {e}", mode.as_str());
        AuthError::from(e)
    })?;
    let Some(token) = response.token() else {
        log::warn!("local {} response carried no access_token", mode.as_str());
        return Err(AuthError::InvalidResponse);
    };
    store.set_token(token);
    log::info!("local {} succeeded; session stored", mode.as_str());
    Ok(AppRoute::PROTECTED_ENTRY)
}

/// Login endpoint URL for a redirect-based provider.
///
/// # Errors
///
/// Returns [`AuthError::UnsupportedProvider`] for the local provider, which
/// has no redirect flow.
pub fn external_login_url(config: &ClientConfig, provider: &ProviderId) -> Result<String, AuthError> {
    if !provider.is_external() {
        return Err(AuthError::UnsupportedProvider(provider.to_string()));
    }
    Ok(provider_login_url(config, provider.as_str()))
}

/// Navigate the whole page to the provider's login endpoint. The current
/// page lifecycle ends here; the return trip lands on `/callback`.
///
/// # Errors
///
/// Returns an error for non-redirect providers, or when the browser refuses
/// the navigation (always, outside the browser).
pub fn start_external_login(config: &ClientConfig, provider: &ProviderId) -> Result<(), AuthError> {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let url = external_login_url(config, provider)?;
    log::info!("redirecting to {provider} login");
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(AuthError::Failed(ApiError::Unavailable))?;
        window
            .location()
            .set_href(&url)
            .map_err(|e| AuthError::Failed(ApiError::Network(format!("{e:?}"))))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Failed(ApiError::Unavailable))
    }
}
