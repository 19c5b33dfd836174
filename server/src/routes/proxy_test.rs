use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request as HttpRequest, StatusCode};
use axum::routing::{get, post};
use tower::ServiceExt;

use super::*;

// =============================================================================
// is_proxied
// =============================================================================

#[test]
fn api_writes_are_proxied() {
    assert!(is_proxied(&Method::POST, "/auth/login", Some("application/json")));
    assert!(is_proxied(&Method::POST, "/events", None));
    assert!(is_proxied(&Method::POST, "/invitations/abc/accept", None));
    assert!(is_proxied(&Method::POST, "/organizations", None));
}

#[test]
fn json_reads_are_proxied() {
    assert!(is_proxied(&Method::GET, "/events", Some("application/json")));
    assert!(is_proxied(&Method::GET, "/events/4/forms", None));
    assert!(is_proxied(&Method::GET, "/auth/me", Some("*/*")));
}

#[test]
fn document_navigation_stays_with_ui() {
    let accept = Some("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8");
    assert!(!is_proxied(&Method::GET, "/events", accept));
    assert!(!is_proxied(&Method::GET, "/events/4", accept));
}

#[test]
fn unrelated_paths_are_not_proxied() {
    assert!(!is_proxied(&Method::POST, "/login", None));
    assert!(!is_proxied(&Method::GET, "/eventsx", None));
    assert!(!is_proxied(&Method::GET, "/pkg/eventleads-ui.js", None));
    assert!(!is_proxied(&Method::GET, "/healthz", None));
}

// =============================================================================
// middleware
// =============================================================================

async fn list_events() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!([{ "id": 1, "name": "Expo" }]))
}

async fn create_event(headers: HeaderMap, body: String) -> (StatusCode, axum::Json<serde_json::Value>) {
    let auth = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()).unwrap_or_default();
    (StatusCode::CREATED, axum::Json(serde_json::json!({ "auth": auth, "echo": body })))
}

async fn reject_login() -> (StatusCode, axum::Json<serde_json::Value>) {
    (StatusCode::UNAUTHORIZED, axum::Json(serde_json::json!({ "detail": "Invalid credentials" })))
}

async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/auth/login", post(reject_login));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn ui_router() -> Router {
    Router::new().route("/events", get(|| async { "events page" }))
}

fn app(upstream: &str) -> Router {
    let state = AppState { http: reqwest::Client::new(), upstream: Arc::from(upstream) };
    super::super::with_proxy(ui_router(), state)
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn html_get_is_served_by_ui() {
    let upstream = spawn_upstream().await;
    let response = app(&upstream)
        .oneshot(HttpRequest::get("/events").header(header::ACCEPT, "text/html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "events page");
}

#[tokio::test]
async fn json_get_is_forwarded() {
    let upstream = spawn_upstream().await;
    let response = app(&upstream)
        .oneshot(HttpRequest::get("/events").header(header::ACCEPT, "application/json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json[0]["name"], "Expo");
}

#[tokio::test]
async fn post_is_forwarded_with_headers_and_body() {
    let upstream = spawn_upstream().await;
    let response = app(&upstream)
        .oneshot(
            HttpRequest::post("/events")
                .header(header::AUTHORIZATION, "Bearer t0k")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Expo"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["auth"], "Bearer t0k");
    assert_eq!(json["echo"], r#"{"name":"Expo"}"#);
}

#[tokio::test]
async fn upstream_error_status_is_relayed() {
    let upstream = spawn_upstream().await;
    let response = app(&upstream)
        .oneshot(HttpRequest::post("/auth/login").body(Body::from("{}")).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(response).await.contains("Invalid credentials"));
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = app(&format!("http://{addr}"))
        .oneshot(HttpRequest::post("/organizations").body(Body::from("{}")).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["detail"], "backend unreachable");
}

#[tokio::test]
async fn oversized_streamed_body_is_payload_too_large() {
    let upstream = spawn_upstream().await;
    let response = app(&upstream)
        .oneshot(HttpRequest::post("/events").body(Body::from(vec![b'x'; MAX_BODY_BYTES + 1])).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(json["detail"].as_str().unwrap().contains("exceeds"));
}

#[tokio::test]
async fn oversized_declared_length_is_payload_too_large() {
    let upstream = spawn_upstream().await;
    let response = app(&upstream)
        .oneshot(
            HttpRequest::post("/events")
                .header(header::CONTENT_LENGTH, (MAX_BODY_BYTES + 1).to_string())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[test]
fn body_at_limit_is_not_declared_too_large() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_LENGTH, MAX_BODY_BYTES.to_string().parse().unwrap());
    assert!(!declared_too_large(&headers));
    headers.insert(header::CONTENT_LENGTH, (MAX_BODY_BYTES + 1).to_string().parse().unwrap());
    assert!(declared_too_large(&headers));
}
