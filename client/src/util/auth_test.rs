use super::*;
use crate::state::session::MemorySessionStore;

#[test]
fn should_redirect_unauth_without_token() {
    let session = Session::new(MemorySessionStore::default());
    assert!(should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_with_token() {
    let session = Session::new(MemorySessionStore::with_token("t0k"));
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn auth_failure_clears_session() {
    let session = Session::new(MemorySessionStore::with_token("t0k"));
    let err = ApiError::from_response(401, r#"{"detail":"Invalid token"}"#, "x");
    assert!(handle_auth_failure(&session, &err));
    assert_eq!(session.token(), None);
    assert!(should_redirect_unauth(&session));
}

#[test]
fn forbidden_also_clears_session() {
    let session = Session::new(MemorySessionStore::with_token("t0k"));
    let err = ApiError::from_response(403, "", "x");
    assert!(handle_auth_failure(&session, &err));
    assert!(!session.is_signed_in());
}

#[test]
fn other_failures_keep_session() {
    let session = Session::new(MemorySessionStore::with_token("t0k"));
    assert!(!handle_auth_failure(&session, &ApiError::Network));
    assert!(!handle_auth_failure(&session, &ApiError::from_response(500, "", "x")));
    assert_eq!(session.token().as_deref(), Some("t0k"));
}
