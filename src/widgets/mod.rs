//! Home page widgets
//!
//! Fan board and theme toggle persist through a `KeyValueStore`; the backdrop
//! and scroll-to-top button are plain functions of their inputs.

pub mod backdrop;
pub mod fan_board;
pub mod storage;
pub mod theme;

pub use backdrop::{scroll_top_visible, XxShape, SCROLL_TOP_THRESHOLD, XX_COUNT};
pub use fan_board::{FanBoard, FAN_SUBMISSIONS_KEY};
pub use storage::{KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use theme::{load_theme, toggle_theme, Theme, LIGHT_MODE_CLASS, THEME_KEY};
