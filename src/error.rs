//! Error types and the user-facing message taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every network failure stops at the operation boundary. Submission paths
//! turn it into a displayed message via [`AuthError::user_message`]; the
//! profile path turns it into a silent session invalidation. Nothing here is
//! allowed to escape as a panic.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const MSG_AUTH_FAILED: &str = "Authentication failed. Please try again.";
pub const MSG_NO_CODE: &str = "No authorization code received.";
pub const MSG_OKTA_AUTH_FAILED: &str = "Okta authentication failed. Please try again.";
pub const MSG_UNKNOWN_REDIRECT_ERROR: &str = "An error occurred during authentication.";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password.";
pub const MSG_INVALID_REQUEST: &str = "Invalid request.";
pub const MSG_INVALID_RESPONSE: &str = "Invalid response from server.";

/// Minimum accepted password length for local auth.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Transport-level failure talking to the identity server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("server responded with {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Local credential precondition failure. Raised before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Name is required to create an account.")]
    MissingName,
}

/// Outcome of a failed login or register attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("bad request")]
    BadRequest(Option<String>),
    #[error("token missing from response")]
    InvalidResponse,
    #[error("authentication failed: {0}")]
    Failed(ApiError),
    #[error("provider `{0}` has no redirect login")]
    UnsupportedProvider(String),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status: 401, .. } => Self::InvalidCredentials,
            ApiError::Status { status: 400, detail } => Self::BadRequest(detail),
            other => Self::Failed(other),
        }
    }
}

impl AuthError {
    /// Message shown on the login screen for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(v) => v.to_string(),
            Self::InvalidCredentials => MSG_INVALID_CREDENTIALS.to_owned(),
            Self::BadRequest(Some(detail)) => detail.clone(),
            Self::BadRequest(None) => MSG_INVALID_REQUEST.to_owned(),
            Self::InvalidResponse => MSG_INVALID_RESPONSE.to_owned(),
            Self::Failed(_) | Self::UnsupportedProvider(_) => MSG_AUTH_FAILED.to_owned(),
        }
    }
}

/// Failure codes the server appends as `/login?error=<code>` after a broken
/// external-provider round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginErrorCode {
    AuthFailed,
    NoCode,
    OktaAuthFailed,
    Unknown(String),
}

impl LoginErrorCode {
    /// Parse the raw query value. Empty values carry no error.
    #[must_use]
    pub fn from_param(raw: &str) -> Option<Self> {
        let code = raw.trim();
        if code.is_empty() {
            return None;
        }
        Some(match code {
            "auth_failed" => Self::AuthFailed,
            "no_code" => Self::NoCode,
            "okta_auth_failed" => Self::OktaAuthFailed,
            other => Self::Unknown(other.to_owned()),
        })
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::AuthFailed => MSG_AUTH_FAILED,
            Self::NoCode => MSG_NO_CODE,
            Self::OktaAuthFailed => MSG_OKTA_AUTH_FAILED,
            Self::Unknown(_) => MSG_UNKNOWN_REDIRECT_ERROR,
        }
    }
}

/// Map an optional `error` query value straight to its display message.
#[must_use]
pub fn redirect_error_message(raw: Option<&str>) -> Option<&'static str> {
    raw.and_then(LoginErrorCode::from_param)
        .map(|code| code.message())
}
