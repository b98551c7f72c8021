//! Home Page
//!
//! Hero, artwork grid, fan corner and the floating theme/scroll controls.

use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use exhibition::content::Exhibition;

use crate::components::{ArtworkGrid, Backdrop, ContentGate, FanCorner, ScrollTop, ThemeToggle};

#[component]
pub fn Home() -> impl IntoView {
    let explore = move |_| {
        if let Some(section) = document().get_element_by_id("gallery") {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    view! {
        <Backdrop />
        <header class="hero">
            <h1>"KAWS"</h1>
            <p class="hero-subtitle">"Companions, characters and the art between them"</p>
            <button id="explore-btn" on:click=explore>"Explore"</button>
        </header>
        <main>
            <section id="gallery">
                <h2>"Gallery"</h2>
                <div id="gallery-grid" class="gallery-grid">
                    <ContentGate ready=|doc: &Exhibition| {
                        view! { <ArtworkGrid artworks=doc.artworks.clone() /> }
                    } />
                </div>
            </section>
            <FanCorner />
        </main>
        <ThemeToggle />
        <ScrollTop />
    }
}
