//! Content Gate
//!
//! Loading spinner, the static failure message, and the wrapper that picks
//! between them and the loaded content.

use leptos::*;

use exhibition::content::Exhibition;

use crate::state::{use_page_state, LoadState};

/// Loading spinner shown while `db.json` is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
        </div>
    }
}

/// Single static paragraph that replaces a failed container
#[component]
pub fn LoadFailed(message: &'static str) -> impl IntoView {
    view! { <p class="load-error">{message}</p> }
}

/// Renders `ready` with the loaded document once it is available
///
/// On failure the whole gate shows only the failure message, so no partially
/// rendered entries remain.
#[component]
pub fn ContentGate<F, IV>(ready: F) -> impl IntoView
where
    F: Fn(&Exhibition) -> IV + 'static,
    IV: IntoView,
{
    let state = use_page_state();

    move || {
        state.load.with(|load| match load {
            LoadState::Loading => view! { <Loading /> }.into_view(),
            LoadState::Ready(content) => ready(content).into_view(),
            LoadState::Failed(message) => view! { <LoadFailed message=*message /> }.into_view(),
        })
    }
}
