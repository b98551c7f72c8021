//! Scroll adapter
//!
//! Samples the layout on every scroll event, hands it to the page controller
//! and applies the resulting activation and parallax to the DOM.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use exhibition::scroll::{parallax_offset, transform_css, Activation, ScrollFrame, TRANSITION_MS};

use super::global::PageState;

/// Class carried by every rendered chapter section
pub const CHAPTER_SELECTOR: &str = ".chapter";

/// Class carried by every chapter image
pub const CHAPTER_IMAGE_SELECTOR: &str = ".chapter-image";

/// Body class for light chapter backgrounds
const DARK_TEXT_CLASS: &str = "dark-text";

/// Attach the scroll listener and evaluate once for the initial position
///
/// Call after the chapters are in the DOM. The listener lives as long as the
/// page.
pub fn wire_scroll(state: PageState) {
    let _ = window_event_listener(ev::scroll, move |_| on_scroll(state));
    on_scroll(state);
}

fn on_scroll(state: PageState) {
    let Some(frame) = sample_frame() else {
        return;
    };

    let tops: Vec<f64> = elements(CHAPTER_SELECTOR)
        .iter()
        .map(|el| el.offset_top() as f64)
        .collect();
    let now = js_sys::Date::now();

    let (activation, parallax) = state
        .update(|page| (page.on_scroll(frame, &tops, now), page.parallax_enabled()))
        .unwrap_or((None, false));

    if let Some(activation) = activation {
        apply_activation(state, &activation);
    }

    if parallax {
        apply_parallax();
    }
}

fn sample_frame() -> Option<ScrollFrame> {
    let window = window();
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrollFrame::new(scroll_y, viewport_height))
}

fn apply_activation(state: PageState, activation: &Activation) {
    if let Some(body) = document().body() {
        let _ = body
            .style()
            .set_property("background-color", &activation.background);

        if let Some(dark_text) = activation.dark_text {
            let _ = body
                .class_list()
                .toggle_with_force(DARK_TEXT_CLASS, dark_text);
        }
    }

    if activation.transition {
        state.fading.set(true);
        gloo_timers::callback::Timeout::new(TRANSITION_MS as u32, move || {
            state.fading.set(false);
            state.update(|page| page.end_transition());
        })
        .forget();
    }
}

fn apply_parallax() {
    for image in elements(CHAPTER_IMAGE_SELECTOR) {
        let top = image.get_bounding_client_rect().top();
        let _ = image
            .style()
            .set_property("transform", &transform_css(parallax_offset(top)));
    }
}

fn elements(selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document().query_selector_all(selector) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
