//! Wire DTOs for the identity/profile server.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON exactly so request bodies and
//! responses round-trip through serde without adapters.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identity provider tag attached to a user profile.
///
/// `Other` keeps tags this client does not know yet, so a server that links a
/// new provider does not break profile decoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Local,
    Google,
    Okta,
    Other(String),
}

impl ProviderId {
    /// Providers reachable through a browser redirect round trip.
    pub const EXTERNAL: [Self; 2] = [Self::Google, Self::Okta];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Google => "google",
            Self::Okta => "okta",
            Self::Other(tag) => tag,
        }
    }

    /// Whether login happens by redirecting to the provider.
    #[must_use]
    pub fn is_external(&self) -> bool {
        !matches!(self, Self::Local)
    }

    /// Button label on the login screen.
    #[must_use]
    pub fn login_label(&self) -> String {
        match self {
            Self::Local => "Sign in with email".to_owned(),
            Self::Google => "Continue with Google".to_owned(),
            Self::Okta => "Continue with Okta".to_owned(),
            Self::Other(tag) => format!("Continue with {tag}"),
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Ok(match tag.as_str() {
            "local" => Self::Local,
            "google" => Self::Google,
            "okta" => Self::Okta,
            _ => Self::Other(tag),
        })
    }
}

impl Serialize for ProviderId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let Ok(id) = raw.parse::<Self>();
        Ok(id)
    }
}

/// Body of `POST /auth/local/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalLoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/local/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalRegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Successful local-auth response. The token is optional on the wire so a
/// malformed 2xx can be reported instead of failing to decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl TokenResponse {
    /// The issued token, if present and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Authenticated user profile from `GET /api/user/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub providers: Vec<ProviderId>,
    /// ISO-8601 timestamp as sent by the server.
    pub created_at: String,
}

impl UserProfile {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("User")
    }

    /// Linked providers, comma separated and upper-cased.
    #[must_use]
    pub fn providers_label(&self) -> String {
        if self.providers.is_empty() {
            return "UNKNOWN".to_owned();
        }
        self.providers
            .iter()
            .map(|p| p.as_str().to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Calendar date part of `created_at` (`YYYY-MM-DD`).
    #[must_use]
    pub fn member_since(&self) -> &str {
        let raw = self.created_at.trim();
        raw.split(['T', ' ']).next().unwrap_or(raw)
    }
}

/// Error body shape used by the identity server (`{"detail": ...}`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail, when the server sent a plain string.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_owned()),
            _ => None,
        }
    }
}

/// Extract the `detail` message from a raw error response body.
#[must_use]
pub fn parse_error_detail(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message(),
        Err(_) => None,
    }
}
