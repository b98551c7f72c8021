//! Response decoding shared by every content source
//!
//! The browser fetches `db.json` with gloo-net, the CLI reads a file or uses
//! reqwest. All of them funnel the status code and body through here so a
//! failure looks the same everywhere.

use super::error::{ContentError, ContentResult};
use super::types::Exhibition;

/// Path of the content document relative to the page
pub const CONTENT_URL: &str = "db.json";

/// Reject any status outside 2xx
pub fn check_status(status: u16) -> ContentResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContentError::Status(status))
    }
}

/// Parse a raw body into an exhibition document
pub fn parse_exhibition(body: &[u8]) -> ContentResult<Exhibition> {
    let doc: Exhibition = serde_json::from_slice(body)?;
    tracing::debug!(
        chapters = doc.chapters.len(),
        artworks = doc.artworks.len(),
        "Parsed exhibition document"
    );
    Ok(doc)
}

/// Status check followed by parsing
pub fn decode_response(status: u16, body: &[u8]) -> ContentResult<Exhibition> {
    check_status(status)?;
    parse_exhibition(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "chapters": [
            {"id": 1, "title": "Origins", "description": "Early work", "image": "img/1.jpg", "bg": "#111111", "year": 1993},
            {"id": 2, "title": "Companion", "description": "", "images": ["img/2a.jpg", "img/2b.jpg"], "bg": "#f4e1c1", "quote": "Art is a way of life"}
        ],
        "artworks": [
            {"title": "Chum", "imageUrl": "img/chum.jpg", "category": "Sculpture", "year": 2000, "medium": "Vinyl", "description": "A figure"}
        ]
    }"##;

    #[test]
    fn test_decode_success() {
        let doc = decode_response(200, SAMPLE.as_bytes()).unwrap();
        assert_eq!(doc.chapters.len(), 2);
        assert_eq!(doc.chapters[1].images(), vec!["img/2a.jpg", "img/2b.jpg"]);
        assert_eq!(doc.artworks[0].image_url, "img/chum.jpg");
    }

    #[test]
    fn test_non_success_status_fails_before_parse() {
        let err = decode_response(500, SAMPLE.as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::Status(500)));

        let err = decode_response(304, b"").unwrap_err();
        assert!(matches!(err, ContentError::Status(304)));
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let err = decode_response(200, b"<html>not json</html>").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let doc = parse_exhibition(br#"{"chapters": []}"#).unwrap();
        assert!(doc.chapters.is_empty());
        assert!(doc.artworks.is_empty());
    }
}
