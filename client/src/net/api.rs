//! REST wrappers for every backend operation the UI performs.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport returns [`ApiError::Unavailable`] since
//! these endpoints are only called from browser event handlers and effects.
//!
//! ERROR HANDLING
//! ==============
//! Each wrapper issues exactly one request and classifies the result with
//! [`decode`] / [`expect_success`]. There is no retry; a transport failure
//! surfaces immediately as [`ApiError::Network`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AcceptInvitationRequest, CreatedId, Credentials, EmailRequest, EventItem, FormItem, InvitationPreview,
    LoginResponse, NameRequest, OrganizationDraft, OrganizationSummary, ResetConfirmRequest, StatusResponse,
    UserProfile,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

/// Status and body text of a completed HTTP exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    /// Final URL after any redirects the browser followed.
    pub url: String,
    pub redirected: bool,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// PATHS
// =============================================================================

fn verify_path(token: &str) -> String {
    format!("/auth/verify?token={}", urlencoding::encode(token))
}

fn invitation_preview_path(token: &str) -> String {
    format!("/invitations/{}/preview", urlencoding::encode(token))
}

fn invitation_accept_path(token: &str) -> String {
    format!("/invitations/{}/accept", urlencoding::encode(token))
}

fn event_forms_path(event_id: i64) -> String {
    format!("/events/{event_id}/forms")
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Decoded value of `name` in the query string of `url`.
fn query_param(url: &str, name: &str) -> Option<String> {
    let query = url.split_once('?')?.1;
    let query = query.split_once('#').map_or(query, |(q, _)| q);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then(|| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value).map_or(value.clone(), std::borrow::Cow::into_owned)
        })
    })
}

// =============================================================================
// RESPONSE CLASSIFICATION
// =============================================================================

/// Parse a 2xx body as `T`, or classify the failure.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for non-2xx statuses and
/// [`ApiError::Decode`] when a 2xx body does not match `T`.
pub fn decode<T: DeserializeOwned>(raw: &RawResponse, fallback: &str) -> Result<T, ApiError> {
    if !raw.is_success() {
        return Err(ApiError::from_response(raw.status, &raw.body, fallback));
    }
    serde_json::from_str(&raw.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Accept any 2xx response, ignoring its body.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for non-2xx statuses.
pub fn expect_success(raw: &RawResponse, fallback: &str) -> Result<(), ApiError> {
    if raw.is_success() {
        Ok(())
    } else {
        Err(ApiError::from_response(raw.status, &raw.body, fallback))
    }
}

/// Classify the outcome of `GET /auth/verify`.
///
/// The backend always redirects to `/login`, carrying `error=<message>` on
/// failure and `verified=true` on success. The browser follows the redirect,
/// so the final URL decides the result.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the backend's message when the
/// redirect reports an error or carries no verification marker, and the
/// classified failure for non-2xx statuses.
pub fn verify_outcome(raw: &RawResponse, fallback: &str) -> Result<(), ApiError> {
    expect_success(raw, fallback)?;
    if let Some(message) = query_param(&raw.url, "error").filter(|m| !m.is_empty()) {
        return Err(ApiError::Rejected { status: 400, message });
    }
    if !raw.redirected || query_param(&raw.url, "verified").as_deref() == Some("true") {
        return Ok(());
    }
    Err(ApiError::Rejected { status: 400, message: fallback.to_owned() })
}

fn json_body<T: Serialize>(payload: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// TRANSPORT
// =============================================================================

async fn send(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = crate::util::config::api_url(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        }
        .header("Accept", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer_header(token));
        }
        let request = match body {
            Some(payload) => builder.json(&payload),
            None => builder.build(),
        }
        .map_err(|e| {
            log::warn!("building {method:?} {path} failed: {e}");
            ApiError::Network
        })?;
        let resp = request.send().await.map_err(|e| {
            log::warn!("{method:?} {path} failed: {e}");
            ApiError::Network
        })?;
        let status = resp.status();
        let url = resp.url();
        let redirected = resp.redirected();
        let body = resp.text().await.map_err(|e| {
            log::warn!("{method:?} {path} body read failed: {e}");
            ApiError::Network
        })?;
        if !(200..300).contains(&status) {
            log::warn!("{method:?} {path} returned {status}");
        }
        Ok(RawResponse { status, body, url, redirected })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, token, body);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a session token via `POST /auth/login`.
///
/// # Errors
///
/// 401 for bad credentials, 403 for an unverified email, or a transport failure.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = json_body(&Credentials { email: email.to_owned(), password: password.to_owned() })?;
    let raw = send(Method::Post, "/auth/login", None, Some(body)).await?;
    decode(&raw, "Login failed. Please check your credentials.")
}

/// Register a new account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns the backend's rejection (e.g. account already exists) or a transport failure.
pub async fn signup(email: &str, password: &str) -> Result<StatusResponse, ApiError> {
    let body = json_body(&Credentials { email: email.to_owned(), password: password.to_owned() })?;
    let raw = send(Method::Post, "/auth/signup", None, Some(body)).await?;
    decode(&raw, "Signup failed")
}

/// Confirm an email verification token via `GET /auth/verify?token=...`.
///
/// The backend answers with a redirect to `/login`; see [`verify_outcome`].
///
/// # Errors
///
/// Returns the backend's rejection (invalid, expired or used link) or a
/// transport failure.
pub async fn verify(token: &str) -> Result<(), ApiError> {
    let raw = send(Method::Get, &verify_path(token), None, None).await?;
    verify_outcome(&raw, "Verification failed")
}

/// Re-send the verification email via `POST /auth/resend`.
///
/// # Errors
///
/// 429 when rate-limited, or a transport failure.
pub async fn resend(email: &str) -> Result<StatusResponse, ApiError> {
    let body = json_body(&EmailRequest { email: email.to_owned() })?;
    let raw = send(Method::Post, "/auth/resend", None, Some(body)).await?;
    decode(&raw, "Resend failed")
}

/// Request a password reset email via `POST /auth/reset/request`.
///
/// # Errors
///
/// 429 when rate-limited, or a transport failure.
pub async fn reset_request(email: &str) -> Result<StatusResponse, ApiError> {
    let body = json_body(&EmailRequest { email: email.to_owned() })?;
    let raw = send(Method::Post, "/auth/reset/request", None, Some(body)).await?;
    decode(&raw, "Request failed")
}

/// Set a new password with a reset token via `POST /auth/reset/confirm`.
///
/// # Errors
///
/// 400 for an invalid or expired token, or a transport failure.
pub async fn reset_confirm(token: &str, new_password: &str) -> Result<StatusResponse, ApiError> {
    let body =
        json_body(&ResetConfirmRequest { token: token.to_owned(), new_password: new_password.to_owned() })?;
    let raw = send(Method::Post, "/auth/reset/confirm", None, Some(body)).await?;
    decode(&raw, "Reset failed")
}

/// Fetch the signed-in user's identity from `GET /auth/me`.
///
/// # Errors
///
/// 401 when the token is missing or invalid, or a transport failure.
pub async fn me(session_token: &str) -> Result<UserProfile, ApiError> {
    let raw = send(Method::Get, "/auth/me", Some(session_token), None).await?;
    decode(&raw, "Failed to load profile")
}

// =============================================================================
// INVITATIONS
// =============================================================================

/// Load invitee greeting data via `GET /invitations/{token}/preview`.
///
/// # Errors
///
/// 404 for an unknown token, or a transport failure.
pub async fn invitation_preview(invite_token: &str) -> Result<InvitationPreview, ApiError> {
    let raw = send(Method::Get, &invitation_preview_path(invite_token), None, None).await?;
    decode(&raw, "Failed to load invitation")
}

/// Accept an invitation and set the invitee's password via `POST /invitations/{token}/accept`.
///
/// # Errors
///
/// [`ApiError::Gone`] for an expired link, [`ApiError::NotFound`] for an
/// invalid one, other rejections, or a transport failure.
pub async fn accept_invitation(invite_token: &str, password: &str) -> Result<(), ApiError> {
    let body = json_body(&AcceptInvitationRequest { password: password.to_owned() })?;
    let raw = send(Method::Post, &invitation_accept_path(invite_token), None, Some(body)).await?;
    expect_success(&raw, "Something went wrong. Please try again.")
}

// =============================================================================
// EVENTS + FORMS
// =============================================================================

/// List the organization's events via `GET /events`.
///
/// # Errors
///
/// 401 for an invalid session, or a transport failure.
pub async fn list_events(session_token: &str) -> Result<Vec<EventItem>, ApiError> {
    let raw = send(Method::Get, "/events", Some(session_token), None).await?;
    decode(&raw, "Failed to load events")
}

/// Create an event via `POST /events`.
///
/// # Errors
///
/// 401 for an invalid session, other rejections, or a transport failure.
pub async fn create_event(session_token: &str, name: &str) -> Result<CreatedId, ApiError> {
    let body = json_body(&NameRequest { name: name.to_owned() })?;
    let raw = send(Method::Post, "/events", Some(session_token), Some(body)).await?;
    decode(&raw, "Failed to create event")
}

/// List an event's forms via `GET /events/{id}/forms`.
///
/// # Errors
///
/// 401 for an invalid session, or a transport failure.
pub async fn list_forms(session_token: &str, event_id: i64) -> Result<Vec<FormItem>, ApiError> {
    let raw = send(Method::Get, &event_forms_path(event_id), Some(session_token), None).await?;
    decode(&raw, "Failed to load forms")
}

/// Create a form under an event via `POST /events/{id}/forms`.
///
/// # Errors
///
/// 404 when the event is not visible to the session, other rejections, or a transport failure.
pub async fn create_form(session_token: &str, event_id: i64, name: &str) -> Result<CreatedId, ApiError> {
    let body = json_body(&NameRequest { name: name.to_owned() })?;
    let raw = send(Method::Post, &event_forms_path(event_id), Some(session_token), Some(body)).await?;
    decode(&raw, "Failed to create form")
}

// =============================================================================
// ORGANIZATIONS
// =============================================================================

/// Persist the onboarding draft via `POST /organizations`.
///
/// # Errors
///
/// 401 for an invalid session, 4xx validation failures, or a transport failure.
pub async fn create_organization(
    session_token: &str,
    draft: &OrganizationDraft,
) -> Result<OrganizationSummary, ApiError> {
    let body = json_body(draft)?;
    let raw = send(Method::Post, "/organizations", Some(session_token), Some(body)).await?;
    decode(&raw, "Failed to create organisation")
}
