//! # Exhibition
//!
//! Client-side behavior of a small static art-exhibition site, written as a
//! rendering-free core plus a native preview server.
//!
//! ## Pages
//!
//! - **home**: artwork grid, fan corner, theme toggle, animated backdrop
//! - **storyline**: scrolling chapters with cross-fade, parallax and contrast
//! - **gallery**: chapter rooms, category filter and lightbox
//!
//! All three are driven by one `db.json` document. The `exhibition-ui`
//! crate renders them with Leptos and calls into this crate for every
//! decision.
//!
//! ## Modules
//!
//! - [`content`]: document types, decoding, lint
//! - [`scroll`]: active-chapter math, transition lock, parallax
//! - [`gallery`]: category filter and lightbox state
//! - [`widgets`]: fan board, theme, backdrop
//! - [`page`]: per-page controller owning all mutable state
//! - `server`, `config`: preview server (feature `server`)
//!
//! ## Quick Start
//!
//! ```rust
//! use exhibition::content::decode_response;
//! use exhibition::page::{PageController, PageKind};
//! use exhibition::scroll::ScrollFrame;
//!
//! let body = br##"{"chapters": [{"title": "Origins", "bg": "#101010"}], "artworks": []}"##;
//! let mut page = PageController::from_load(PageKind::Storyline, decode_response(200, body)).unwrap();
//!
//! let activation = page.on_scroll(ScrollFrame::new(0.0, 900.0), &[0.0], 0.0).unwrap();
//! assert_eq!(activation.background, "#101010");
//! ```

pub mod content;
pub mod gallery;
pub mod page;
pub mod scroll;
pub mod widgets;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use content::{Artwork, Chapter, ContentError, ContentResult, Exhibition};

pub use gallery::{CategoryFilter, Lightbox, LightboxView};

pub use page::{PageController, PageKind};

pub use scroll::{Activation, ActivationVariant, ScrollActivator, ScrollFrame};

pub use widgets::{FanBoard, KeyValueStore, MemoryStore, StoreError, Theme};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, ContentConfig, LoggingConfig, ServerConfig};

#[cfg(feature = "server")]
pub use server::{build_router, serve, ServerError, ServerState};
