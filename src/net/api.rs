//! REST calls to the identity/profile server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so submission and profile
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{LocalLoginRequest, LocalRegisterRequest, TokenResponse, UserProfile};
use crate::config::ClientConfig;
use crate::error::ApiError;

pub const LOCAL_LOGIN_PATH: &str = "/auth/local/login";
pub const LOCAL_REGISTER_PATH: &str = "/auth/local/register";
pub const PROFILE_PATH: &str = "/api/user/profile";

/// Identity server operations the session logic depends on.
///
/// Futures are not `Send`: in the browser they run on the single-threaded
/// event loop.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/local/login`.
    async fn local_login(&self, req: &LocalLoginRequest) -> Result<TokenResponse, ApiError>;

    /// `POST /auth/local/register`.
    async fn local_register(&self, req: &LocalRegisterRequest) -> Result<TokenResponse, ApiError>;

    /// `GET /api/user/profile` with `Authorization: Bearer <token>`.
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError>;
}

/// Shared API handle provided through Leptos context.
pub type ApiHandle = Arc<dyn AuthApi + Send + Sync>;

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Full URL of the external-provider login endpoint, `/auth/{provider}/login`.
#[must_use]
pub fn provider_login_url(config: &ClientConfig, provider: &str) -> String {
    config.endpoint(&format!("/auth/{provider}/login"))
}

/// 2xx responses carry a payload; anything else is a failure body.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// HTTP implementation backed by `gloo-net`.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: ClientConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn into_handle(self) -> ApiHandle {
        Arc::new(self)
    }
}

#[cfg(feature = "hydrate")]
async fn failure_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = match resp.text().await {
        Ok(body) => super::types::parse_error_detail(&body),
        Err(_) => None,
    };
    ApiError::Status { status, detail }
}

#[cfg(feature = "hydrate")]
async fn post_for_token<T: serde::Serialize>(url: &str, payload: &T) -> Result<TokenResponse, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !is_success(resp.status()) {
        return Err(failure_from_response(resp).await);
    }
    resp.json::<TokenResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn local_login(
        &self,
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))] req: &LocalLoginRequest,
    ) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_for_token(&self.config().endpoint(LOCAL_LOGIN_PATH), req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn local_register(
        &self,
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))] req: &LocalRegisterRequest,
    ) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_for_token(&self.config().endpoint(LOCAL_REGISTER_PATH), req).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_profile(
        &self,
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))] token: &str,
    ) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config().endpoint(PROFILE_PATH))
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !is_success(resp.status()) {
                return Err(failure_from_response(resp).await);
            }
            resp.json::<UserProfile>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
