//! Gallery filtering and lightbox

pub mod filter;
pub mod lightbox;

pub use filter::{categories, CategoryFilter, FilterButton, ALL_CATEGORY};
pub use lightbox::{Lightbox, LightboxView};
