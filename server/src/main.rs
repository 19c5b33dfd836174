mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::new(&config).expect("proxy client init failed");
    let app = routes::app(state).expect("leptos configuration missing");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upstream = %config.api_proxy_target, "eventleads ui listening");
    axum::serve(listener, app).await.expect("server failed");
}
