use crate::{
    components::{quick_search::QuickSearch, search_form::SearchForm},
    global_state::search_context::provide_search_context,
};
use explorer_core::ExplorerConfig;
use leptos::prelude::*;

#[component]
pub fn SearchPanel(#[prop(optional)] config: ExplorerConfig) -> impl IntoView {
    provide_search_context(config);
    view! {
        <div class="search-panel">
            <SearchForm />
            <QuickSearch />
        </div>
    }
}
