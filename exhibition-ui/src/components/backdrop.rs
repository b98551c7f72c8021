//! Animated backdrop of drifting "XX" marks

use leptos::*;

use exhibition::widgets::{XxShape, XX_COUNT};

#[component]
pub fn Backdrop() -> impl IntoView {
    let shapes = XxShape::scatter(XX_COUNT, js_sys::Math::random);

    view! {
        <div class="animated-bg" aria-hidden="true">
            {shapes
                .into_iter()
                .map(|shape| view! { <div class="xx-shape" style=shape.style()>"XX"</div> })
                .collect_view()}
        </div>
    }
}
