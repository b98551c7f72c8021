//! Content loading error types

use thiserror::Error;

/// Errors that can occur while retrieving the content document
#[derive(Error, Debug)]
pub enum ContentError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Response arrived with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Body was not a valid exhibition document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err.to_string())
    }
}

/// Result type alias for content operations
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContentError::Status(404);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ContentError = json_err.into();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
