//! End-to-end session flows against an in-memory store and a scripted
//! identity server.

use std::sync::Mutex;

use async_trait::async_trait;
use futures::executor::block_on;

use auth_portal::error::ApiError;
use auth_portal::net::api::AuthApi;
use auth_portal::net::types::{LocalLoginRequest, LocalRegisterRequest, ProviderId, TokenResponse, UserProfile};
use auth_portal::session::callback::CallbackResolver;
use auth_portal::session::guard::{AppRoute, GuardState, NavigationIntent, evaluate};
use auth_portal::session::profile::{ProfileOutcome, load_profile, logout};
use auth_portal::session::store::{MemorySessionStore, SessionStore, StoreOp};
use auth_portal::session::submit::{AuthMode, Credentials, submit_local};
use auth_portal::state::auth::AuthState;
use auth_portal::state::login::LoginFormState;

// =============================================================================
// SCRIPTED SERVER
// =============================================================================

#[derive(Default)]
struct FakeServer {
    login_token: Option<String>,
    valid_token: Option<String>,
    requests: Mutex<Vec<String>>,
}

impl FakeServer {
    fn issuing(token: &str) -> Self {
        Self { login_token: Some(token.to_owned()), valid_token: Some(token.to_owned()), ..Self::default() }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn issue(&self) -> Result<TokenResponse, ApiError> {
        match &self.login_token {
            Some(token) => Ok(TokenResponse { access_token: Some(token.clone()), token_type: Some("bearer".to_owned()) }),
            None => Err(ApiError::Status { status: 401, detail: Some("Invalid email or password".to_owned()) }),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeServer {
    async fn local_login(&self, req: &LocalLoginRequest) -> Result<TokenResponse, ApiError> {
        self.requests.lock().unwrap().push(format!("POST /auth/local/login {}", req.email));
        self.issue()
    }

    async fn local_register(&self, req: &LocalRegisterRequest) -> Result<TokenResponse, ApiError> {
        self.requests.lock().unwrap().push(format!("POST /auth/local/register {}", req.email));
        self.issue()
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.requests.lock().unwrap().push("GET /api/user/profile".to_owned());
        if self.valid_token.as_deref() != Some(token) {
            return Err(ApiError::Status { status: 401, detail: Some("Invalid token".to_owned()) });
        }
        Ok(UserProfile {
            id: Some(1),
            name: Some("Ada".to_owned()),
            email: "a@b.com".to_owned(),
            providers: vec![ProviderId::Local],
            created_at: "2024-03-05T10:11:12".to_owned(),
        })
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn guard_decision_is_stable_while_token_is_unchanged() {
    let store = MemorySessionStore::with_token("tok");
    let navigations = [AppRoute::Dashboard, AppRoute::Login, AppRoute::Dashboard, AppRoute::Callback, AppRoute::Dashboard];
    for route in navigations.into_iter().filter(|r| r.is_protected()) {
        assert_eq!(evaluate(store.get_token().as_deref(), route), NavigationIntent::RenderProtected);
    }

    store.clear_token();
    for route in navigations.into_iter().filter(|r| r.is_protected()) {
        assert_eq!(evaluate(store.get_token().as_deref(), route), NavigationIntent::RedirectToLogin);
    }
}

#[test]
fn token_committed_by_login_reads_back_until_cleared() {
    let server = FakeServer::issuing("eyJ.token.value");
    let store = MemorySessionStore::new();
    block_on(submit_local(&server, &store, AuthMode::Login, &Credentials::login("a@b.com", "secret1"))).unwrap();
    assert_eq!(store.get_token().as_deref(), Some("eyJ.token.value"));

    store.clear_token();
    assert_eq!(store.get_token(), None);
}

#[test]
fn callback_with_token_commits_and_enters_dashboard() {
    let store = MemorySessionStore::new();
    let mut resolver = CallbackResolver::new();
    let next = resolver.resolve(&store, "?token=abc123", Some("abc123"));
    assert_eq!(next, Some(AppRoute::Dashboard));
    assert_eq!(store.get_token().as_deref(), Some("abc123"));
    assert_eq!(GuardState::settle(store.get_token().as_deref(), AppRoute::Dashboard), GuardState::Authenticated);
}

#[test]
fn callback_without_token_returns_to_login_without_writing() {
    let store = MemorySessionStore::new();
    let mut resolver = CallbackResolver::new();
    assert_eq!(resolver.resolve(&store, "", None), Some(AppRoute::Login));
    assert!(store.ops().is_empty());
}

#[test]
fn rejected_profile_clears_token_before_redirect() {
    let server = FakeServer::issuing("fresh");
    let store = MemorySessionStore::with_token("stale");
    let mut view = AuthState::loading();

    let outcome = block_on(load_profile(&server, &store));
    view.apply(&outcome);

    assert_eq!(outcome, ProfileOutcome::Invalidated(AppRoute::Login));
    assert_eq!(store.ops(), vec![StoreOp::Clear]);
    assert!(!view.ready());
    assert_eq!(GuardState::settle(store.get_token().as_deref(), AppRoute::Dashboard), GuardState::Unauthenticated);
}

#[test]
fn login_error_param_messages() {
    let mut form = LoginFormState::default();
    form.apply_error_param(Some("no_code"));
    assert_eq!(form.error.as_deref(), Some("No authorization code received."));

    let mut form = LoginFormState::default();
    form.apply_error_param(Some("bogus_value"));
    assert_eq!(form.error.as_deref(), Some("An error occurred during authentication."));
}

// =============================================================================
// END-TO-END FLOWS
// =============================================================================

#[test]
fn local_login_then_dashboard_loads_profile() {
    let server = FakeServer::issuing("tok1");
    let store = MemorySessionStore::new();
    let mut form = LoginFormState { email: "a@b.com".to_owned(), password: "secret1".to_owned(), ..LoginFormState::default() };

    let (mode, creds) = form.begin_submit().unwrap();
    let result = block_on(submit_local(&server, &store, mode, &creds));
    form.finish_submit(&result);

    assert_eq!(result, Ok(AppRoute::Dashboard));
    assert_eq!(store.get_token().as_deref(), Some("tok1"));
    assert!(!form.loading);

    let outcome = block_on(load_profile(&server, &store));
    assert!(matches!(outcome, ProfileOutcome::Loaded(ref p) if p.email == "a@b.com"));
    assert_eq!(store.get_token().as_deref(), Some("tok1"));
}

#[test]
fn register_with_short_password_never_reaches_server() {
    let server = FakeServer::issuing("tok1");
    let store = MemorySessionStore::new();
    let mut form = LoginFormState::default();
    form.toggle_mode();
    form.email = "a@b.com".to_owned();
    form.password = "abcd".to_owned();
    form.name = "Ada".to_owned();

    let (mode, creds) = form.begin_submit().unwrap();
    let result = block_on(submit_local(&server, &store, mode, &creds));
    form.finish_submit(&result);

    assert!(server.requests().is_empty());
    assert!(store.ops().is_empty());
    assert_eq!(form.error.as_deref(), Some("Password must be at least 6 characters."));
}

#[test]
fn logout_twice_is_idempotent() {
    let store = MemorySessionStore::with_token("tok1");
    assert_eq!(logout(&store), AppRoute::Login);
    assert_eq!(logout(&store), AppRoute::Login);
    assert_eq!(store.get_token(), None);
}

#[test]
fn failed_login_keeps_previous_session() {
    let server = FakeServer { login_token: None, ..FakeServer::default() };
    let store = MemorySessionStore::with_token("keep-me");
    let mut form = LoginFormState { email: "a@b.com".to_owned(), password: "wrong-pass".to_owned(), ..LoginFormState::default() };

    let (mode, creds) = form.begin_submit().unwrap();
    let result = block_on(submit_local(&server, &store, mode, &creds));
    form.finish_submit(&result);

    assert_eq!(form.error.as_deref(), Some("Invalid email or password."));
    assert_eq!(store.get_token().as_deref(), Some("keep-me"));
    assert_eq!(server.requests(), vec!["POST /auth/local/login a@b.com".to_owned()]);
}
