use crate::global_state::search_context::use_search_context;
use leptos::prelude::*;

/// Preset searches from the config, one click fills the box and searches.
#[component]
pub fn QuickSearch() -> impl IntoView {
    let Some(ctx) = use_search_context() else {
        return ().into_any();
    };
    let presets = ctx.config.with_value(|c| c.quick_searches.clone());
    if presets.is_empty() {
        return ().into_any();
    }
    view! {
        <div class="quick-searches d-flex flex-wrap gap-2 mt-3">
            <span class="text-muted me-1">"Try:"</span>
            {presets
                .into_iter()
                .map(|preset| {
                    let value = preset.clone();
                    view! {
                        <button
                            type="button"
                            class="btn btn-outline-primary btn-sm quick-search"
                            data-query=preset.clone()
                            on:click=move |_| ctx.select(value.clone())
                        >
                            {preset.clone()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
