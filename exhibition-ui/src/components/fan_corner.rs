//! Fan Corner
//!
//! Visitors leave short messages that persist in local storage and are
//! listed newest first.

use leptos::*;

use exhibition::widgets::FanBoard;

use crate::state::LocalStore;

#[component]
pub fn FanCorner() -> impl IntoView {
    let board = store_value(FanBoard::new(LocalStore::open()));
    let submissions = create_rw_signal(board.with_value(|b| b.newest_first()));
    let message = create_rw_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let text = message.get_untracked();
        let mut stored = false;
        board.update_value(|b| match b.submit(&text) {
            Ok(added) => stored = added,
            Err(e) => {
                web_sys::console::error_1(&format!("Could not save message: {}", e).into());
            }
        });

        if stored {
            message.set(String::new());
            submissions.set(board.with_value(|b| b.newest_first()));
        }
    };

    view! {
        <section class="fan-corner" id="fan-corner">
            <h2>"Fan Corner"</h2>
            <form id="fan-form" on:submit=on_submit>
                <input
                    id="fan-message"
                    type="text"
                    placeholder="Leave a message..."
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                />
                <button type="submit">"Post"</button>
            </form>
            <div id="fan-submissions">
                {move || {
                    submissions
                        .get()
                        .into_iter()
                        .map(|text| view! { <p class="fan-submission">{text}</p> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
