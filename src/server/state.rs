//! Server State
//!
//! Immutable state shared by the preview server handlers.

use std::path::PathBuf;
use std::time::Instant;

use crate::config::{ContentConfig, ServerConfig};
use crate::content::{ContentResult, ContentSource, Exhibition, FileSource};

/// Shared state for all handlers
pub struct ServerState {
    /// Directory served as the site root
    pub site_dir: PathBuf,
    /// `db.json` served at `/db.json`
    pub content_path: PathBuf,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(server: &ServerConfig, content: &ContentConfig) -> Self {
        Self {
            site_dir: PathBuf::from(&server.site_dir),
            content_path: PathBuf::from(&content.path),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Read and parse the content document as the browser would receive it
    pub async fn load_content(&self) -> ContentResult<Exhibition> {
        FileSource::new(&self.content_path).load().await
    }
}
