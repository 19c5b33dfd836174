//! Build-time client configuration.
//!
//! `API_BASE` is read at compile time. When unset or empty, API paths stay
//! same-origin and the hosting server's proxy resolves them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL baked in at build time, if any.
pub const API_BASE: Option<&str> = option_env!("API_BASE");

/// Join `path` onto `base` with exactly one `/` between them.
#[must_use]
pub fn join_api(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Resolve an API path against the configured [`API_BASE`].
#[must_use]
pub fn api_url(path: &str) -> String {
    join_api(API_BASE.unwrap_or_default(), path)
}
