//! Development proxy from the UI origin to the backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls `/auth/*`, `/events/*`, `/invitations/*` and
//! `/organizations/*` same-origin. Some of those paths are also UI routes
//! (`/events`, `/events/{id}`), so a request is forwarded only when it is not
//! a document navigation: any non-GET method, or a GET that does not accept
//! `text/html`.
//!
//! ERROR HANDLING
//! ==============
//! Upstream failures become `502 Bad Gateway` and oversized request bodies
//! `413 Payload Too Large`, both with a `{"detail": ...}` body, the same
//! shape the backend uses, so the client's message extraction works
//! unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Backend path roots served through the proxy.
pub const PROXY_PREFIXES: [&str; 4] = ["/auth", "/events", "/invitations", "/organizations"];

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

const HOP_HEADERS: [header::HeaderName; 5] = [
    header::HOST,
    header::CONNECTION,
    header::CONTENT_LENGTH,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("proxy client unavailable: {0}")]
    ClientBuild(String),
    #[error("request body unreadable: {0}")]
    Body(String),
    #[error("request body exceeds {} bytes", MAX_BODY_BYTES)]
    TooLarge,
    #[error("backend unreachable")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ClientBuild(_) | Self::Body(_) | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

fn has_prefix(path: &str) -> bool {
    PROXY_PREFIXES
        .iter()
        .any(|prefix| path.strip_prefix(prefix).is_some_and(|rest| rest.is_empty() || rest.starts_with('/')))
}

/// Whether a request belongs to the backend rather than the UI router.
#[must_use]
pub fn is_proxied(method: &Method, path: &str, accept: Option<&str>) -> bool {
    if !has_prefix(path) {
        return false;
    }
    *method != Method::GET || !accept.is_some_and(|value| value.contains("text/html"))
}

fn declared_too_large(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
        .is_some_and(|len| len > MAX_BODY_BYTES)
}

fn exceeds_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<http_body_util::LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

fn read_body_error(err: &axum::Error) -> ProxyError {
    if exceeds_limit(err) { ProxyError::TooLarge } else { ProxyError::Body(err.to_string()) }
}

fn strip_hop_headers(headers: &mut HeaderMap) {
    for name in &HOP_HEADERS {
        headers.remove(name);
    }
}

/// Forward `req` to the backend and relay its response verbatim.
///
/// # Errors
///
/// Returns [`ProxyError::TooLarge`] past [`MAX_BODY_BYTES`], and another
/// [`ProxyError`] when the body cannot be read or the backend does not answer.
pub async fn forward(state: &AppState, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    if declared_too_large(&parts.headers) {
        return Err(ProxyError::TooLarge);
    }
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = format!("{}{path_and_query}", state.upstream);
    let body: Bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| read_body_error(&e))?;

    let mut headers = parts.headers;
    strip_hop_headers(&mut headers);

    let upstream = state.http.request(parts.method, &url).headers(headers).body(body).send().await?;
    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    strip_hop_headers(&mut response_headers);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

/// Middleware: forward backend-bound requests, pass everything else on.
pub async fn proxy_api(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let accept = req.headers().get(header::ACCEPT).and_then(|v| v.to_str().ok());
    if !is_proxied(req.method(), req.uri().path(), accept) {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    match forward(&state, req).await {
        Ok(response) => {
            tracing::debug!(%method, %path, status = response.status().as_u16(), "proxied");
            response
        }
        Err(e @ ProxyError::TooLarge) => {
            tracing::warn!(%method, %path, "proxy request body too large");
            e.into_response()
        }
        Err(e) => {
            tracing::error!(%method, %path, upstream = %state.upstream, error = %e, "proxy request failed");
            e.into_response()
        }
    }
}
