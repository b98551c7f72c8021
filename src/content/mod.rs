//! Exhibition Content
//!
//! Everything about the `db.json` document:
//!
//! - **types**: `Exhibition`, `Chapter`, `Artwork`
//! - **loader**: status check and parsing shared by every fetch path
//! - **lint**: warnings for fields that will render empty
//! - **source**: file and HTTP sources (native only)
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use exhibition::content::decode_response;
//!
//! let doc = decode_response(200, br#"{"chapters": [{"title": "Origins"}]}"#).unwrap();
//! assert_eq!(doc.chapters[0].title, "Origins");
//! assert!(doc.artworks.is_empty());
//! ```

pub mod error;
pub mod lint;
pub mod loader;
#[cfg(feature = "server")]
pub mod source;
pub mod types;

pub use error::{ContentError, ContentResult};
pub use lint::{lint, ContentWarning};
pub use loader::{check_status, decode_response, parse_exhibition, CONTENT_URL};
#[cfg(feature = "server")]
pub use source::{load_logged, source_for, ContentSource, FileSource, HttpSource};
pub use types::{Artwork, Chapter, EntryId, Exhibition, Year};
