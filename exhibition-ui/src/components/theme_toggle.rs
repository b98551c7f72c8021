//! Theme Toggle
//!
//! Light/dark switch persisted in local storage. The body carries the
//! light-mode class while the light theme is on.

use leptos::*;

use exhibition::widgets::{load_theme, toggle_theme, LIGHT_MODE_CLASS};

use crate::state::LocalStore;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = store_value(LocalStore::open());
    let theme = create_rw_signal(store.with_value(load_theme));

    create_effect(move |_| {
        let light = theme.get().is_light();
        if let Some(body) = document().body() {
            let _ = body.class_list().toggle_with_force(LIGHT_MODE_CLASS, light);
        }
    });

    let on_click = move |_| {
        let current = theme.get_untracked();
        let mut next = None;
        store.update_value(|s| match toggle_theme(s, current) {
            Ok(toggled) => next = Some(toggled),
            Err(e) => {
                web_sys::console::warn_1(&format!("Theme not saved: {}", e).into());
                next = Some(current.toggled());
            }
        });
        if let Some(next) = next {
            theme.set(next);
        }
    };

    view! {
        <button id="theme-toggle" class="theme-toggle" aria-label="Toggle theme" on:click=on_click>
            {move || theme.get().icon()}
        </button>
    }
}
