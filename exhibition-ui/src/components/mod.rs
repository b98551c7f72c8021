//! UI Components
//!
//! Leptos components shared by the three exhibition pages.

pub mod artwork_card;
pub mod backdrop;
pub mod chapter;
pub mod fan_corner;
pub mod filter_bar;
pub mod footer;
pub mod lightbox;
pub mod loading;
pub mod scroll_top;
pub mod theme_toggle;

pub use artwork_card::{ArtworkCard, ArtworkGrid};
pub use backdrop::Backdrop;
pub use chapter::{ChapterList, ChapterSection, QuoteTicker};
pub use fan_corner::FanCorner;
pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use lightbox::Lightbox;
pub use loading::{ContentGate, LoadFailed, Loading};
pub use scroll_top::ScrollTop;
pub use theme_toggle::ThemeToggle;
