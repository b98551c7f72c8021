//! Page Controller
//!
//! One controller per loaded page. It is created only after the content
//! document arrived and parsed, and it owns every piece of mutable page
//! state: active chapter, transition lock, filter selection, lightbox and the
//! collected chapter quotes.

use crate::content::{Artwork, Chapter, ContentResult, Exhibition};
use crate::gallery::{CategoryFilter, Lightbox, LightboxView};
use crate::scroll::{Activation, ActivationVariant, ScrollActivator, ScrollFrame};

/// Which of the three pages is running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageKind {
    #[default]
    Home,
    Storyline,
    Gallery,
}

impl PageKind {
    /// Read the `data-page` attribute of `<body>`; unknown values are home
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("storyline") => PageKind::Storyline,
            Some("gallery") => PageKind::Gallery,
            _ => PageKind::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Storyline => "storyline",
            PageKind::Gallery => "gallery",
        }
    }

    /// Static text that replaces the content container on load failure
    pub fn failure_message(&self) -> &'static str {
        match self {
            PageKind::Home => "Could not load gallery. Please try again later.",
            PageKind::Storyline => "Could not load the story. Please try again later.",
            PageKind::Gallery => "Could not load the exhibition. Please try again later.",
        }
    }

    /// Scroll behavior for pages that render chapters
    pub fn activation_variant(&self) -> Option<ActivationVariant> {
        match self {
            PageKind::Home => None,
            PageKind::Storyline => Some(ActivationVariant::STORYLINE),
            PageKind::Gallery => Some(ActivationVariant::GALLERY),
        }
    }

    pub fn renders_chapters(&self) -> bool {
        self.activation_variant().is_some()
    }

    pub fn renders_artworks(&self) -> bool {
        matches!(self, PageKind::Home | PageKind::Gallery)
    }

    pub fn has_filter(&self) -> bool {
        matches!(self, PageKind::Gallery)
    }
}

/// Mutable state of one page after a successful load
#[derive(Debug, Clone)]
pub struct PageController {
    kind: PageKind,
    content: Exhibition,
    activator: Option<ScrollActivator>,
    filter: Option<CategoryFilter>,
    lightbox: Lightbox,
    quotes: Vec<String>,
}

impl PageController {
    /// Wire up a page from a parsed document
    ///
    /// Scroll activation is only set up when the page shows chapters and
    /// there is at least one. The gallery filter always exists on the gallery
    /// page so an empty collection still shows the catch-all button.
    pub fn initialize(kind: PageKind, content: Exhibition) -> Self {
        let activator = kind
            .activation_variant()
            .filter(|_| !content.chapters.is_empty())
            .map(|variant| ScrollActivator::new(&content.chapters, variant));

        let filter = kind
            .has_filter()
            .then(|| CategoryFilter::from_artworks(&content.artworks));

        let quotes = content.quotes();

        tracing::info!(
            page = kind.as_str(),
            chapters = content.chapters.len(),
            artworks = content.artworks.len(),
            scroll = activator.is_some(),
            "Page initialized"
        );

        Self {
            kind,
            content,
            activator,
            filter,
            lightbox: Lightbox::default(),
            quotes,
        }
    }

    /// Turn a load result into a controller or the page's failure message
    pub fn from_load(kind: PageKind, result: ContentResult<Exhibition>) -> Result<Self, &'static str> {
        match result {
            Ok(content) => Ok(Self::initialize(kind, content)),
            Err(e) => {
                tracing::error!(page = kind.as_str(), error = %e, "Could not load content");
                Err(kind.failure_message())
            }
        }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn content(&self) -> &Exhibition {
        &self.content
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.content.chapters
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.content.artworks
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    // ============ Scroll ============

    pub fn activator(&self) -> Option<&ScrollActivator> {
        self.activator.as_ref()
    }

    pub fn active_chapter(&self) -> Option<usize> {
        self.activator.as_ref().and_then(ScrollActivator::active)
    }

    /// Quote of the active chapter, if it has one
    pub fn active_quote(&self) -> Option<&str> {
        let index = self.active_chapter()?;
        self.content.chapters.get(index)?.quote.as_deref()
    }

    /// Feed one scroll event through the activator
    pub fn on_scroll(&mut self, frame: ScrollFrame, tops: &[f64], now_ms: f64) -> Option<Activation> {
        self.activator.as_mut()?.on_scroll(frame, tops, now_ms)
    }

    /// Cross-fade timer fired
    pub fn end_transition(&mut self) {
        if let Some(activator) = self.activator.as_mut() {
            activator.release();
        }
    }

    pub fn parallax_enabled(&self) -> bool {
        self.activator
            .as_ref()
            .map(|a| a.variant().parallax)
            .unwrap_or(false)
    }

    // ============ Gallery ============

    pub fn filter(&self) -> Option<&CategoryFilter> {
        self.filter.as_ref()
    }

    pub fn select_category(&mut self, label: &str) -> bool {
        self.filter
            .as_mut()
            .map(|f| f.select(label))
            .unwrap_or(false)
    }

    /// Whether the artwork at `index` is currently shown
    pub fn is_artwork_visible(&self, index: usize) -> bool {
        match (self.filter.as_ref(), self.content.artworks.get(index)) {
            (Some(filter), Some(artwork)) => filter.is_visible(&artwork.category),
            (None, Some(_)) => true,
            (_, None) => false,
        }
    }

    pub fn open_artwork(&mut self, index: usize) {
        if index < self.content.artworks.len() {
            self.lightbox.open(index);
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    pub fn lightbox_view(&self) -> Option<LightboxView> {
        self.lightbox.view(&self.content.artworks)
    }
}
