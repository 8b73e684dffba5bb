use axum::{
    Router,
    routing::{get, post},
};
use configuration::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

/// Builds the application router. Split out of `run_server` so tests can
/// exercise routes without binding a socket.
pub fn build_router(config: Config) -> Router {
    let app_state = Arc::new(AppState { config });

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/execute/:side/:quantity", post(handlers::execute))
        .with_state(app_state)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, config: Config) -> anyhow::Result<()> {
    // Note: Tracing is already initialized in main.rs, so we don't need to initialize it again here.
    let app = build_router(config);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
