//! Exhibition Preview Server
//!
//! Run with: cargo run --bin exhibition
//!
//! # Configuration
//!
//! Config file: `<config_dir>/exhibition/config.toml` or `./exhibition.toml`.
//!
//! Environment variables:
//! - `EXHIBITION_HOST`: Host to bind to (default: 127.0.0.1)
//! - `EXHIBITION_PORT`: Port to listen on (default: 8084)
//! - `EXHIBITION_SITE_DIR`: Static site directory (default: ./site)
//! - `EXHIBITION_CONTENT`: Content document (default: ./site/db.json)
//! - `RUST_LOG`: Log filter (overrides the configured level)

use exhibition::config::Config;
use exhibition::logging::init_logging;
use exhibition::server::{serve, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_logging(&config.logging);

    tracing::info!("Starting exhibition preview v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Site directory: {:?}", config.server.site_dir);
    tracing::info!("Content document: {:?}", config.content.path);

    let state = ServerState::new(&config.server, &config.content);
    serve(state, &config.server).await?;

    tracing::info!("Exhibition preview stopped");
    Ok(())
}
