//! Gallery Page
//!
//! Chapter rooms followed by the filterable artwork grid and its lightbox.

use leptos::*;

use exhibition::content::Exhibition;

use crate::components::{ArtworkGrid, ChapterList, ContentGate, FilterBar, Lightbox};

#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <main class="exhibition">
            <section class="rooms">
                <ContentGate ready=|doc: &Exhibition| {
                    view! { <ChapterList chapters=doc.chapters.clone() /> }
                } />
            </section>
            <section class="collection">
                <FilterBar />
                <div id="gallery-grid" class="gallery-grid">
                    <ContentGate ready=|doc: &Exhibition| {
                        view! { <ArtworkGrid artworks=doc.artworks.clone() /> }
                    } />
                </div>
            </section>
        </main>
        <Lightbox />
    }
}
