//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (content document parses)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use super::error::ServerResult;
use super::state::ServerState;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Content document status: ok, error
    pub content: String,
    pub chapters: usize,
    pub artworks: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// 503 with an error body while `db.json` cannot be served as valid content.
pub async fn readiness(State(state): State<Arc<ServerState>>) -> ServerResult<StatusCode> {
    state.load_content().await?;
    Ok(StatusCode::OK)
}

/// GET /health
pub async fn full_health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    let (status, content, chapters, artworks) = match state.load_content().await {
        Ok(doc) => ("healthy", "ok", doc.chapters.len(), doc.artworks.len()),
        Err(e) => {
            tracing::warn!(error = %e, "Content check failed");
            ("degraded", "error", 0, 0)
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        content: content.to_string(),
        chapters,
        artworks,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
