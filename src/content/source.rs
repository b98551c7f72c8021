//! Native content sources
//!
//! Where the CLI and the preview server get `db.json` from: a local file or a
//! running site. The browser has its own fetch in the UI crate.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use super::error::{ContentError, ContentResult};
use super::loader::{decode_response, parse_exhibition};
use super::types::Exhibition;

/// Anything that can produce an exhibition document
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable location, used in logs
    fn describe(&self) -> String;

    /// Retrieve and parse the document once
    async fn load(&self) -> ContentResult<Exhibition>;
}

/// `db.json` on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> ContentResult<Exhibition> {
        let bytes = tokio::fs::read(&self.path).await?;
        parse_exhibition(&bytes)
    }
}

/// `db.json` served over HTTP
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source with a 10 second request timeout
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> ContentResult<Exhibition> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        decode_response(status, &body)
    }
}

/// Pick a source from a CLI argument: URLs go over HTTP, anything else is a path
pub fn source_for(location: &str) -> Box<dyn ContentSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Load from a source, logging the failure before handing it back
pub async fn load_logged(source: &dyn ContentSource) -> ContentResult<Exhibition> {
    match source.load().await {
        Ok(doc) => {
            tracing::info!(
                source = %source.describe(),
                chapters = doc.chapters.len(),
                artworks = doc.artworks.len(),
                "Loaded exhibition content"
            );
            Ok(doc)
        }
        Err(e) => {
            tracing::error!(source = %source.describe(), error = %e, "Could not load content");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_source_loads_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, r#"{"chapters": [{"title": "One"}], "artworks": []}"#).unwrap();

        let doc = FileSource::new(&path).load().await.unwrap();
        assert_eq!(doc.chapters[0].title, "One");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.load().await, Err(ContentError::Io(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let source = HttpSource::new("http://127.0.0.1:1/db.json");
        assert!(matches!(
            load_logged(&source).await,
            Err(ContentError::Network(_))
        ));
    }

    #[test]
    fn test_source_for_dispatch() {
        assert_eq!(source_for("https://example.org/db.json").describe(), "https://example.org/db.json");
        assert_eq!(source_for("site/db.json").describe(), "site/db.json");
    }
}
