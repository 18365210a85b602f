use crate::{
    global_state::search_context::use_search_context,
    timers::{release_listeners, ListenerSlot},
};
use leptos::{ev, leptos_dom::helpers::window_event_listener, prelude::*};
use wasm_bindgen::JsCast;

/// Clicks inside this region never close the panel.
pub const SEARCH_REGION: &str = ".search-container";

fn inside_search_region(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(SEARCH_REGION).ok().flatten())
        .is_some()
}

#[component]
pub fn SuggestionPanel() -> impl IntoView {
    let Some(ctx) = use_search_context() else {
        log::warn!("SuggestionPanel rendered outside of a search panel");
        return ().into_any();
    };

    // the page-wide click listener only lives while the panel is open
    let outside_click: ListenerSlot = StoredValue::new_local(Vec::new());
    Effect::new(move |_| {
        if ctx.panel_open.get() {
            if outside_click.with_value(Vec::is_empty) {
                let handle = window_event_listener(ev::click, move |event| {
                    if !inside_search_region(&event) {
                        ctx.hide();
                    }
                });
                outside_click.update_value(|handles| handles.push(handle));
            }
        } else {
            release_listeners(outside_click);
        }
    });
    on_cleanup(move || release_listeners(outside_click));

    view! {
        <div
            id="suggestions"
            class="suggestions mt-2"
            style:display=move || if ctx.panel_open.get() { "block" } else { "none" }
        >
            <div class="d-flex flex-wrap gap-2">
                <For
                    each=move || ctx.suggestions.get()
                    key=|suggestion| suggestion.clone()
                    children=move |suggestion: String| {
                        let value = suggestion.clone();
                        view! {
                            <button
                                type="button"
                                class="btn btn-outline-secondary btn-sm suggestion-item"
                                on:click=move |_| ctx.select(value.clone())
                            >
                                {suggestion}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
    .into_any()
}
