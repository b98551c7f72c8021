//! Artwork Card
//!
//! Grid entry for one artwork. On the gallery page the card follows the
//! category filter and opens the lightbox when its image is clicked.

use leptos::*;

use exhibition::content::Artwork;
use exhibition::page::PageKind;

use crate::state::use_page_state;

#[component]
pub fn ArtworkCard(index: usize, artwork: Artwork) -> impl IntoView {
    let state = use_page_state();
    let interactive = state.kind == PageKind::Gallery;

    let category = artwork.category.clone();
    let hidden = move || {
        state
            .filter
            .with(|filter| filter.as_ref().is_some_and(|f| !f.is_visible(&category)))
    };

    let on_open = move |_| {
        if interactive {
            state.update(|page| page.open_artwork(index));
        }
    };

    view! {
        <div class="artwork-card" class:hidden=hidden data-category=artwork.category.clone()>
            <img
                src=artwork.image_url.clone()
                alt=artwork.title.clone()
                loading="lazy"
                class:clickable=interactive
                on:click=on_open
            />
            <h3>{artwork.title.clone()}</h3>
            <p class="artwork-caption">{artwork.caption()}</p>
        </div>
    }
}

/// Every artwork in document order
#[component]
pub fn ArtworkGrid(artworks: Vec<Artwork>) -> impl IntoView {
    artworks
        .into_iter()
        .enumerate()
        .map(|(index, artwork)| view! { <ArtworkCard index=index artwork=artwork /> })
        .collect_view()
}
