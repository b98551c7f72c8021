//! Page State
//!
//! The `PageController` owns the page's mutable state; signals here mirror
//! what the view needs so Leptos can re-render the affected nodes.

use leptos::*;

use exhibition::content::Exhibition;
use exhibition::gallery::{CategoryFilter, LightboxView};
use exhibition::page::{PageController, PageKind};

/// Where the content document stands
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Exhibition),
    /// Static message that replaces the content container
    Failed(&'static str),
}

/// State provided to every component on the page
#[derive(Clone, Copy)]
pub struct PageState {
    pub kind: PageKind,
    /// Created once the content document loaded
    pub controller: StoredValue<Option<PageController>>,
    pub load: RwSignal<LoadState>,
    pub active_chapter: RwSignal<Option<usize>>,
    pub active_quote: RwSignal<Option<String>>,
    /// Cross-fade overlay running
    pub fading: RwSignal<bool>,
    pub filter: RwSignal<Option<CategoryFilter>>,
    pub lightbox: RwSignal<Option<LightboxView>>,
}

/// Provide page state to the component tree
pub fn provide_page_state(kind: PageKind) -> PageState {
    let state = PageState {
        kind,
        controller: store_value(None),
        load: create_rw_signal(LoadState::Loading),
        active_chapter: create_rw_signal(None),
        active_quote: create_rw_signal(None),
        fading: create_rw_signal(false),
        filter: create_rw_signal(None),
        lightbox: create_rw_signal(None),
    };

    provide_context(state);
    state
}

pub fn use_page_state() -> PageState {
    use_context::<PageState>().expect("PageState not found")
}

impl PageState {
    /// Install the controller after a successful load
    pub fn install(&self, controller: PageController) {
        let content = controller.content().clone();
        self.controller.set_value(Some(controller));
        self.sync();
        self.load.set(LoadState::Ready(content));
    }

    /// Run a mutation against the controller, then refresh the signals
    pub fn update<R>(&self, f: impl FnOnce(&mut PageController) -> R) -> Option<R> {
        let mut result = None;
        self.controller.update_value(|controller| {
            result = controller.as_mut().map(f);
        });
        self.sync();
        result
    }

    /// Copy derived controller state into the signals
    pub fn sync(&self) {
        self.controller.with_value(|controller| {
            let Some(controller) = controller else {
                return;
            };

            let active = controller.active_chapter();
            if self.active_chapter.get_untracked() != active {
                self.active_chapter.set(active);
                self.active_quote.set(controller.active_quote().map(str::to_string));
            }

            let filter = controller.filter().cloned();
            if self.filter.get_untracked() != filter {
                self.filter.set(filter);
            }

            let lightbox = controller.lightbox_view();
            if self.lightbox.get_untracked() != lightbox {
                self.lightbox.set(lightbox);
            }
        });
    }
}
