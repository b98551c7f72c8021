//! Lightbox
//!
//! Overlay with the full-size image and details of one artwork. Clicking the
//! backdrop or the close control dismisses it; clicks inside the content
//! do not.

use leptos::*;

use exhibition::gallery::LightboxView;

use crate::state::use_page_state;

#[component]
pub fn Lightbox() -> impl IntoView {
    let state = use_page_state();

    let close = move |_| {
        state.update(|page| page.close_lightbox());
    };

    move || {
        state.lightbox.get().map(|details: LightboxView| {
            view! {
                <div class="lightbox active" on:click=close>
                    <div class="lightbox-content" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                        <button class="lightbox-close" aria-label="Close" on:click=close>
                            "×"
                        </button>
                        <img src=details.image_url alt=details.title.clone() />
                        <div class="lightbox-details">
                            <h3>{details.title}</h3>
                            <p class="lightbox-meta">{details.year} " · " {details.medium}</p>
                            <p>{details.description}</p>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
