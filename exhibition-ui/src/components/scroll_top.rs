//! Scroll-to-top button, shown once the page is scrolled down

use leptos::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use exhibition::widgets::scroll_top_visible;

#[component]
pub fn ScrollTop() -> impl IntoView {
    let visible = create_rw_signal(false);

    let check = move || {
        let y = window().scroll_y().unwrap_or(0.0);
        let show = scroll_top_visible(y);
        if visible.get_untracked() != show {
            visible.set(show);
        }
    };
    let _ = window_event_listener(ev::scroll, move |_| check());
    check();

    let on_click = move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <button id="scroll-top-btn" class:visible=move || visible.get() aria-label="Back to top" on:click=on_click>
            "↑"
        </button>
    }
}
