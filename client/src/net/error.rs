//! Typed failures for backend HTTP calls.
//!
//! ERROR HANDLING
//! ==============
//! Every wrapper in `api` funnels non-2xx responses through
//! [`ApiError::from_response`], so pages branch on the variant (expired,
//! invalid, session-invalid) and render `Display` for everything else.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Maximum characters of a non-JSON error body surfaced to the user.
pub const RAW_BODY_LIMIT: usize = 160;

/// Copy shown when no response reached the client.
pub const NETWORK_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Unable to reach the server. Please try again.")]
    Network,

    /// 401/403: the session token is missing, expired, or lacks access.
    #[error("{message}")]
    Unauthorized { status: u16, message: String },

    /// 404: unknown token or resource.
    #[error("{message}")]
    NotFound { message: String },

    /// 410: the token existed but has expired.
    #[error("{message}")]
    Gone { message: String },

    /// Any other non-2xx response.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response, extracting the backend's message from `body`.
    ///
    /// `fallback` is used when the body carries no usable message.
    #[must_use]
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = response_message(body, fallback);
        match status {
            401 | 403 => Self::Unauthorized { status, message },
            404 => Self::NotFound { message },
            410 => Self::Gone { message },
            _ => Self::Rejected { status, message },
        }
    }

    /// True for failures that invalidate the stored session.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status when the backend answered, `None` for transport failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Rejected { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Gone { .. } => Some(410),
            Self::Network | Self::Decode(_) | Self::Unavailable => None,
        }
    }
}

/// Pull a user-facing message out of an error body.
///
/// JSON bodies yield their `detail` (a string, or the first `msg` of a
/// validation-error list) and otherwise `fallback`. Non-JSON bodies are
/// truncated to [`RAW_BODY_LIMIT`] characters.
#[must_use]
pub fn response_message(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return fallback.to_owned();
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => detail_message(&value).unwrap_or_else(|| fallback.to_owned()),
        Err(_) => trimmed.chars().take(RAW_BODY_LIMIT).collect(),
    }
}

fn detail_message(value: &serde_json::Value) -> Option<String> {
    let detail = value.get("detail")?;
    if let Some(text) = detail.as_str() {
        return (!text.is_empty()).then(|| text.to_owned());
    }
    detail
        .as_array()?
        .first()?
        .get("msg")?
        .as_str()
        .map(str::to_owned)
}
