//! Exhibition document types
//!
//! Mirrors the shape of `db.json`:
//! - `Exhibition`: the document root with `chapters` and `artworks`
//! - `Chapter`: one section of the scrolling storyline
//! - `Artwork`: one piece in the gallery grid
//!
//! Every field defaults when absent. A missing title renders as empty text,
//! it is never a decode error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of the content document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Exhibition {
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub artworks: Vec<Artwork>,
}

impl Exhibition {
    /// Quotes of all chapters that carry one, in chapter order
    pub fn quotes(&self) -> Vec<String> {
        self.chapters
            .iter()
            .filter_map(|c| c.quote.as_deref())
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Chapter or artwork identifier; authors use both numbers and slugs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum EntryId {
    Number(i64),
    Text(String),
}

impl Default for EntryId {
    fn default() -> Self {
        EntryId::Text(String::new())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{}", n),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

/// A year, either `1999` or a free-form span like `"1999–2005"`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
        }
    }
}

/// One section of the storyline
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    #[serde(default)]
    pub id: EntryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quote: Option<String>,
    /// Single image variant
    #[serde(default)]
    pub image: Option<String>,
    /// Multi image variant
    #[serde(default)]
    pub images: Vec<String>,
    /// Page background color while this chapter is active
    #[serde(default)]
    pub bg: String,
    #[serde(default)]
    pub year: Option<Year>,
}

impl Chapter {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: EntryId::Text(id.into()),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Builder method: set the background color
    pub fn bg(mut self, bg: impl Into<String>) -> Self {
        self.bg = bg.into();
        self
    }

    /// Builder method: set the single image
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Builder method: set the quote
    pub fn quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }

    /// All images of the chapter, `image` first, then `images`
    pub fn images(&self) -> Vec<&str> {
        self.image
            .iter()
            .map(String::as_str)
            .chain(self.images.iter().map(String::as_str))
            .filter(|url| !url.is_empty())
            .collect()
    }

    /// Year as display text, empty when absent
    pub fn year_label(&self) -> String {
        self.year.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

/// One piece in the gallery
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub year: Option<Year>,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub description: String,
}

impl Artwork {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Year as display text, empty when absent
    pub fn year_label(&self) -> String {
        self.year.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Caption line shown under a grid card: `"{category} - {year}"`
    pub fn caption(&self) -> String {
        format!("{} - {}", self.category, self.year_label())
    }
}
