//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the proxy middleware. It holds one pooled
//! `reqwest` client and the backend origin; nothing else is shared.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::routes::proxy::ProxyError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend origin without a trailing `/`.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build the upstream client.
    ///
    /// Redirects are passed back to the browser untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the TLS backend fails to initialize.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, upstream: Arc::from(config.api_proxy_target.as_str()) })
    }
}
