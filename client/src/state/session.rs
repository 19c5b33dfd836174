//! Session token storage for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is the only client state that survives a reload. Views
//! read it through a [`Session`] handle provided via Leptos context rather
//! than touching storage directly, so guards and sign-out are testable with
//! [`MemorySessionStore`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Persistent key-value backing for the session token.
///
/// There is no client-side expiry: a token is valid until an API call says otherwise.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn token(&self) -> Option<String> {
        crate::util::storage::read_item(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        crate::util::storage::write_item(TOKEN_STORAGE_KEY, token);
    }

    fn clear(&self) {
        crate::util::storage::remove_item(TOKEN_STORAGE_KEY);
    }
}

/// In-process token store used during SSR and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.lock().map_or(None, |guard| guard.clone())
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// Cloneable handle to the active session store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Platform default: `localStorage` in the browser, memory elsewhere.
    #[must_use]
    pub fn for_platform() -> Self {
        if cfg!(feature = "hydrate") {
            Self::new(BrowserSessionStore)
        } else {
            Self::new(MemorySessionStore::default())
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    pub fn set_token(&self, token: &str) {
        self.store.set_token(token);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("signed_in", &self.is_signed_in()).finish()
    }
}

/// Fetch the [`Session`] provided by the root `App` component.
pub fn use_session() -> Session {
    leptos::prelude::expect_context::<Session>()
}
