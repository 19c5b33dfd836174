//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and every authenticated API failure ends the session the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";

/// True when the view must not render for this session.
#[must_use]
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.is_signed_in()
}

/// Clear the session when `err` says the token is no longer accepted.
///
/// Returns `true` when the caller should send the user to `/login`.
pub fn handle_auth_failure(session: &Session, err: &ApiError) -> bool {
    if err.is_auth_failure() {
        session.clear();
        true
    } else {
        false
    }
}

/// Redirect to `/login` once mounted whenever no token is present.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Full page load of `path`, dropping all in-memory client state.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::warn!("redirect to {path} failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
