//! Pages
//!
//! One component per HTML page; `App` picks the one named by the body.

pub mod gallery;
pub mod home;
pub mod storyline;

pub use gallery::Gallery;
pub use home::Home;
pub use storyline::Storyline;
