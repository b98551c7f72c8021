//! Preview server configuration
//!
//! A TOML file (`exhibition.toml`) with `EXHIBITION_*` environment
//! variables layered on top. Every field has a default, so an empty or
//! missing file yields a server on 127.0.0.1:8084 serving `./site`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Preview server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the HTML, CSS, images and WASM bundle
    #[serde(default = "default_site_dir")]
    pub site_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_site_dir() -> String {
    "./site".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            site_dir: default_site_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Content document configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Path of `db.json` served at `/db.json`
    #[serde(default = "default_content_path")]
    pub path: String,
}

fn default_content_path() -> String {
    "./site/db.json".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: default_content_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("exhibition={},tower_http={}", self.level, self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Read one TOML file; environment variables are not consulted
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Defaults plus environment
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// File plus environment
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First readable file among the user config dir and `./exhibition.toml`
    ///
    /// Falls back to [`Config::from_env`] when neither exists or parses.
    pub fn load_default() -> Self {
        let candidates = dirs::config_dir()
            .map(|dir| dir.join("exhibition").join("config.toml"))
            .into_iter()
            .chain(std::iter::once(PathBuf::from("./exhibition.toml")));

        for path in candidates.filter(|p| p.exists()) {
            match Self::load_with_env(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Config loaded");
                    return config;
                }
                Err(e) => tracing::warn!(error = %e, "Skipping config file"),
            }
        }

        tracing::info!("No config file, using defaults");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("EXHIBITION_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("EXHIBITION_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(site_dir) = var("EXHIBITION_SITE_DIR") {
            self.server.site_dir = site_dir;
        }
        if let Some(path) = var("EXHIBITION_CONTENT") {
            self.content.path = path;
        }
        if let Some(level) = var("EXHIBITION_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("EXHIBITION_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {error}", path.display())]
    Io { path: PathBuf, error: String },

    #[error("invalid config in {}: {error}", path.display())]
    Parse { path: PathBuf, error: String },
}

/// Commented `exhibition.toml` with every default spelled out
pub fn generate_default_config() -> String {
    r#"# Exhibition Configuration
#
# Environment variables override these settings:
# - EXHIBITION_HOST
# - EXHIBITION_PORT
# - EXHIBITION_SITE_DIR
# - EXHIBITION_CONTENT
# - EXHIBITION_LOG_LEVEL
# - EXHIBITION_LOG_FORMAT

[server]
# Preview server host
host = "127.0.0.1"

# Preview server port
port = 8084

# Directory with index.html, storyline.html, gallery.html and assets
site_dir = "./site"

[content]
# Content document served at /db.json
path = "./site/db.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.addr(), "127.0.0.1:8084");
        assert_eq!(config.server.site_dir, "./site");
        assert_eq!(config.content.path, "./site/db.json");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exhibition.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exhibition.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
        assert!(matches!(
            Config::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("EXHIBITION_PORT", "9100"),
            ("EXHIBITION_CONTENT", "/srv/db.json"),
            ("EXHIBITION_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.content.path, "/srv/db.json");
        assert!(config.logging.is_json());
        assert_eq!(config.logging.filter_directive(), "exhibition=info,tower_http=info");
    }

    #[test]
    fn test_bad_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|name| (name == "EXHIBITION_PORT").then(|| "high".to_string()));
        assert_eq!(config.server.port, 8084);
    }
}
