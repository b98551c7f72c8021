//! Optional-field checks
//!
//! The site renders whatever it gets; these warnings only help authors spot
//! holes in `db.json` before publishing.

use std::fmt;

use super::types::Exhibition;

/// A missing field that will render as empty text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentWarning {
    ChapterMissing { index: usize, field: &'static str },
    ArtworkMissing { index: usize, field: &'static str },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentWarning::ChapterMissing { index, field } => {
                write!(f, "chapters[{}] has no {}", index, field)
            }
            ContentWarning::ArtworkMissing { index, field } => {
                write!(f, "artworks[{}] has no {}", index, field)
            }
        }
    }
}

/// Collect warnings in document order
pub fn lint(doc: &Exhibition) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();

    for (index, chapter) in doc.chapters.iter().enumerate() {
        if chapter.title.trim().is_empty() {
            warnings.push(ContentWarning::ChapterMissing { index, field: "title" });
        }
        if chapter.bg.trim().is_empty() {
            warnings.push(ContentWarning::ChapterMissing { index, field: "bg" });
        }
        if chapter.images().is_empty() {
            warnings.push(ContentWarning::ChapterMissing { index, field: "image" });
        }
    }

    for (index, artwork) in doc.artworks.iter().enumerate() {
        if artwork.title.trim().is_empty() {
            warnings.push(ContentWarning::ArtworkMissing { index, field: "title" });
        }
        if artwork.image_url.trim().is_empty() {
            warnings.push(ContentWarning::ArtworkMissing { index, field: "imageUrl" });
        }
        if artwork.category.trim().is_empty() {
            warnings.push(ContentWarning::ArtworkMissing { index, field: "category" });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::{Artwork, Chapter};

    #[test]
    fn test_complete_document_is_clean() {
        let doc = Exhibition {
            chapters: vec![Chapter::new("1", "One").bg("#000").image("a.jpg")],
            artworks: vec![Artwork {
                image_url: "b.jpg".into(),
                ..Artwork::new("Chum", "Sculpture")
            }],
        };
        assert!(lint(&doc).is_empty());
    }

    #[test]
    fn test_reports_in_document_order() {
        let doc = Exhibition {
            chapters: vec![Chapter::new("1", "").image("a.jpg")],
            artworks: vec![Artwork::new("Chum", "")],
        };
        let warnings = lint(&doc);
        assert_eq!(
            warnings,
            vec![
                ContentWarning::ChapterMissing { index: 0, field: "title" },
                ContentWarning::ChapterMissing { index: 0, field: "bg" },
                ContentWarning::ArtworkMissing { index: 0, field: "imageUrl" },
                ContentWarning::ArtworkMissing { index: 0, field: "category" },
            ]
        );
        assert_eq!(warnings[0].to_string(), "chapters[0] has no title");
    }
}
