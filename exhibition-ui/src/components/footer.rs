use chrono::Datelike;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="site-footer">
            <p>"© " {year} " KAWS Exhibition"</p>
        </footer>
    }
}
