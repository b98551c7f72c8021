//! Exhibition Pages
//!
//! Client-side behavior of the exhibition site built with Leptos (WASM).
//!
//! # Pages
//!
//! - `home`: artwork grid, fan corner, theme toggle, animated backdrop
//! - `storyline`: scrolling chapters with cross-fade and parallax
//! - `gallery`: chapter rooms, category filter, lightbox
//!
//! # Architecture
//!
//! One bundle serves all three HTML pages. Each page names itself with
//! `<body data-page="...">`; there is no router. Every decision (active
//! chapter, visible artworks, theme) is made by the `exhibition` crate; the
//! code here samples the DOM and applies the results.

use leptos::*;

use exhibition::page::PageKind;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let kind = PageKind::from_attr(
        document()
            .body()
            .and_then(|body| body.get_attribute("data-page"))
            .as_deref(),
    );

    mount_to_body(move || view! { <app::App kind=kind /> });
}
