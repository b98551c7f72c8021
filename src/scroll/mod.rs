//! Scroll-driven chapter activation
//!
//! Pure functions from (scroll position, chapter boundaries) to
//! (active chapter, image offsets). The browser adapter samples the layout,
//! calls into here, and applies the result to the DOM.
//!
//! - **activation**: active-chapter search and `ScrollActivator` state
//! - **lock**: 600 ms cross-fade guard
//! - **parallax**: image translation
//! - **color**: light-background check for text contrast
//!
//! # Example
//!
//! ```rust
//! use exhibition::content::Chapter;
//! use exhibition::scroll::{ActivationVariant, ScrollActivator, ScrollFrame};
//!
//! let chapters = vec![
//!     Chapter::new("1", "Origins").bg("#101010"),
//!     Chapter::new("2", "Companion").bg("#f4e1c1"),
//! ];
//! let mut activator = ScrollActivator::new(&chapters, ActivationVariant::PLAIN);
//!
//! let tops = [0.0, 1200.0];
//! let act = activator.on_scroll(ScrollFrame::new(800.0, 900.0), &tops, 0.0).unwrap();
//! assert_eq!(act.index, 1);
//! assert_eq!(act.background, "#f4e1c1");
//! ```

pub mod activation;
pub mod color;
pub mod lock;
pub mod parallax;

pub use activation::{
    active_index, Activation, ActivationVariant, ScrollActivator, ScrollFrame, LOOK_AHEAD_DIVISOR,
};
pub use color::{parse_color, prefers_dark_text, Rgb, DARK_TEXT_THRESHOLD};
pub use lock::{TransitionLock, TRANSITION_MS};
pub use parallax::{parallax_offset, parallax_offsets, transform_css, PARALLAX_FACTOR};
