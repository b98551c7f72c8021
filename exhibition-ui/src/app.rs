//! App Root Component
//!
//! Provides page state, loads the content document once and renders the
//! page named by the body's `data-page` attribute.

use leptos::*;

use exhibition::page::{PageController, PageKind};

use crate::api;
use crate::components::Footer;
use crate::pages::{Gallery, Home, Storyline};
use crate::state::{provide_page_state, scroll, LoadState, PageState};

/// Root application component
#[component]
pub fn App(kind: PageKind) -> impl IntoView {
    let state = provide_page_state(kind);

    spawn_local(async move {
        let result = api::fetch_exhibition().await;
        load(state, PageController::from_load(kind, result));
    });

    let page = match kind {
        PageKind::Home => view! { <Home /> }.into_view(),
        PageKind::Storyline => view! { <Storyline /> }.into_view(),
        PageKind::Gallery => view! { <Gallery /> }.into_view(),
    };

    view! {
        {page}
        <Footer />
    }
}

fn load(state: PageState, loaded: Result<PageController, &'static str>) {
    match loaded {
        Ok(controller) => {
            let wire = controller.activator().is_some();
            state.install(controller);

            // Chapters render on the next frame; measure them after that.
            if wire {
                request_animation_frame(move || scroll::wire_scroll(state));
            }
        }
        Err(message) => state.load.set(LoadState::Failed(message)),
    }
}
