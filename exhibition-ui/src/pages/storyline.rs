//! Storyline Page
//!
//! Full-height chapters; scrolling activates one at a time with a cross-fade,
//! background change and parallax images.

use leptos::*;

use exhibition::content::Exhibition;

use crate::components::{ChapterList, ContentGate, QuoteTicker};
use crate::state::use_page_state;

#[component]
pub fn Storyline() -> impl IntoView {
    let state = use_page_state();

    view! {
        <div class="fade-overlay" class:active=move || state.fading.get() />
        <main class="storyline" id="storyline">
            <ContentGate ready=|doc: &Exhibition| {
                view! { <ChapterList chapters=doc.chapters.clone() /> }
            } />
        </main>
        <QuoteTicker />
    }
}
