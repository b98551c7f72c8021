//! Chapter Section
//!
//! One storyline chapter. The `active` class follows the page controller's
//! active chapter; images carry the class the parallax adapter looks for.

use leptos::*;

use exhibition::content::Chapter;

use crate::state::use_page_state;

#[component]
pub fn ChapterSection(index: usize, chapter: Chapter) -> impl IntoView {
    let state = use_page_state();
    let is_active = move || state.active_chapter.get() == Some(index);

    let images = chapter
        .images()
        .into_iter()
        .map(|url| {
            view! {
                <img class="chapter-image" src=url.to_string() alt=chapter.title.clone() loading="lazy" />
            }
        })
        .collect_view();

    let year = chapter.year_label();

    view! {
        <section
            class="chapter"
            class:active=is_active
            id=format!("chapter-{}", chapter.id)
            data-bg=chapter.bg.clone()
        >
            <div class="chapter-media">{images}</div>
            <div class="chapter-text">
                {(!year.is_empty()).then(|| view! { <span class="chapter-year">{year}</span> })}
                <h2>{chapter.title.clone()}</h2>
                <p>{chapter.description.clone()}</p>
                {chapter.quote.clone().map(|quote| view! { <blockquote>{quote}</blockquote> })}
            </div>
        </section>
    }
}

/// All chapters in display order
#[component]
pub fn ChapterList(chapters: Vec<Chapter>) -> impl IntoView {
    view! {
        <div class="chapters">
            {chapters
                .into_iter()
                .enumerate()
                .map(|(index, chapter)| view! { <ChapterSection index=index chapter=chapter /> })
                .collect_view()}
        </div>
    }
}

/// Quote of the active chapter, pinned beside the storyline
#[component]
pub fn QuoteTicker() -> impl IntoView {
    let state = use_page_state();

    view! {
        <aside class="quote-ticker" class:visible=move || state.active_quote.get().is_some()>
            {move || state.active_quote.get().map(|quote| view! { <p>"“" {quote} "”"</p> })}
        </aside>
    }
}
