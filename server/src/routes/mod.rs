//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health check, static `/pkg` assets, and Leptos SSR routes under
//! one Axum router, then wraps the whole router in the backend proxy so API
//! calls are diverted before UI routing sees them.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application: UI routes behind the backend proxy.
///
/// # Errors
///
/// See [`leptos_app`].
pub fn app(state: AppState) -> Result<Router, String> {
    Ok(with_proxy(leptos_app()?, state))
}

/// Leptos SSR frontend plus static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(eventleads_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || eventleads_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// Wrap `ui` so backend-bound requests are proxied before UI routing.
pub fn with_proxy(ui: Router, state: AppState) -> Router {
    Router::new()
        .fallback_service(ui)
        .layer(axum::middleware::from_fn_with_state(state, proxy::proxy_api))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
