//! Client configuration resolved from the deployment environment.
//!
//! The identity server base URL is baked in at build time through the
//! `AUTH_API_URL` environment variable, the same way the static bundle is
//! produced for each deployment target.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Typed client configuration provided to components through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build a config for an explicit base URL. A trailing `/` is dropped.
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { api_base_url: api_base_url.to_owned() }
    }

    /// Build the config from the `AUTH_API_URL` value captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("AUTH_API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        Self::new(raw.unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Join the base URL with an absolute API path such as `/auth/local/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
