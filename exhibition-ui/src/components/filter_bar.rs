//! Category Filter Bar
//!
//! One button per category, "All" first. Exactly one button is active.

use leptos::*;

use exhibition::gallery::FilterButton;

use crate::state::use_page_state;

#[component]
pub fn FilterBar() -> impl IntoView {
    let state = use_page_state();

    let buttons = move || {
        state
            .filter
            .with(|filter| filter.as_ref().map(|f| f.buttons()).unwrap_or_default())
    };

    view! {
        <div class="filter-buttons">
            <For
                each=buttons
                key=|button| (button.label.clone(), button.active)
                children=move |button: FilterButton| {
                    let label = button.label.clone();
                    view! {
                        <button
                            class="filter-btn"
                            class:active=button.active
                            on:click=move |_| {
                                state.update(|page| page.select_category(&label));
                            }
                        >
                            {button.label}
                        </button>
                    }
                }
            />
        </div>
    }
}
