//! Preview Server
//!
//! Serves the static site during authoring so the pages can `fetch("db.json")`
//! over HTTP. Files are served verbatim; nothing is rendered server-side.
//!
//! # Routes
//!
//! - `GET /db.json` - The configured content document
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Content document parses
//! - `GET /health` - Full health status
//! - everything else - Files from the site directory
//!
//! # Example
//!
//! ```rust,ignore
//! use exhibition::config::Config;
//! use exhibition::server::{serve, ServerState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = ServerState::new(&config.server, &config.content);
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod health;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::ServerState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::content::CONTENT_URL;

/// Build the router with all routes and middleware
pub fn build_router(state: ServerState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/", get(health::full_health));

    let content_route = format!("/{}", CONTENT_URL);
    let site = ServeDir::new(&state.site_dir).append_index_html_on_directories(true);
    let content = ServeFile::new(&state.content_path);

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/health", health_routes)
        .route_service(&content_route, content)
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the preview server
pub async fn serve(state: ServerState, config: &ServerConfig) -> ServerResult<()> {
    match state.load_content().await {
        Ok(doc) => tracing::info!(
            chapters = doc.chapters.len(),
            artworks = doc.artworks.len(),
            "Content document {:?} is valid",
            state.content_path
        ),
        Err(e) => tracing::warn!(
            "Content document {:?} will fail to load in the browser: {}",
            state.content_path,
            e
        ),
    }

    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Exhibition preview on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Preview server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
