//! State Management
//!
//! Page state, the scroll adapter and local storage.

pub mod global;
pub mod scroll;
pub mod storage;

pub use global::{provide_page_state, use_page_state, LoadState, PageState};
pub use storage::LocalStore;
