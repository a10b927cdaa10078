use super::*;
use crate::session::store::{MemorySessionStore, StoreOp};

#[test]
fn token_present_is_committed_and_routes_to_dashboard() {
    let store = MemorySessionStore::new();
    let next = resolve_callback(&store, Some("abc123"));
    assert_eq!(next, AppRoute::Dashboard);
    assert_eq!(store.get_token().as_deref(), Some("abc123"));
}

#[test]
fn token_absent_routes_to_login_without_writing() {
    let store = MemorySessionStore::new();
    let next = resolve_callback(&store, None);
    assert_eq!(next, AppRoute::Login);
    assert!(store.ops().is_empty());
}

#[test]
fn empty_token_is_treated_as_absent() {
    let store = MemorySessionStore::with_token("previous");
    let next = resolve_callback(&store, Some(""));
    assert_eq!(next, AppRoute::Login);
    assert_eq!(store.get_token().as_deref(), Some("previous"));
    assert!(store.ops().is_empty());
}

#[test]
fn resolver_runs_once_per_landing() {
    let store = MemorySessionStore::new();
    let mut resolver = CallbackResolver::new();

    assert_eq!(resolver.resolve(&store, "?token=abc123", Some("abc123")), Some(AppRoute::Dashboard));
    assert_eq!(resolver.resolve(&store, "?token=abc123", Some("abc123")), None);
    assert_eq!(store.ops(), vec![StoreOp::Set("abc123".to_owned())]);
}

#[test]
fn resolver_re_evaluates_when_search_changes() {
    let store = MemorySessionStore::new();
    let mut resolver = CallbackResolver::new();

    assert_eq!(resolver.resolve(&store, "?token=one", Some("one")), Some(AppRoute::Dashboard));
    assert_eq!(resolver.resolve(&store, "", None), Some(AppRoute::Login));
    assert_eq!(resolver.resolve(&store, "?token=two", Some("two")), Some(AppRoute::Dashboard));
    assert_eq!(store.get_token().as_deref(), Some("two"));
}
