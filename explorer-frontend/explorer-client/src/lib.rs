mod anchors;
mod host_page;

use crate::host_page::{element_by_id, load_config, load_results, script_text};
use anyhow::{anyhow, Result};
use explorer_app::{ResultsList, SearchPanel};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

const SEARCH_ROOT: &str = "search-root";
const RESULTS_ROOT: &str = "results-root";
const CONFIG_SCRIPT: &str = "explorer-config";
const RESULTS_SCRIPT: &str = "results-data";

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(e) = mount() {
        log::error!("search page failed to start {e:?}");
    }
}

fn mount() -> Result<()> {
    let document = document();
    let config = load_config(script_text(&document, CONFIG_SCRIPT).as_deref());

    match element_by_id(&document, SEARCH_ROOT) {
        Some(root) => {
            log::info!("mounting search panel");
            let config = config.clone();
            leptos::mount::mount_to(root, move || view! { <SearchPanel config /> }).forget();
        }
        None => log::debug!("no #{SEARCH_ROOT} on this page"),
    }

    if let (Some(root), Some(page)) = (
        element_by_id(&document, RESULTS_ROOT),
        load_results(script_text(&document, RESULTS_SCRIPT).as_deref()),
    ) {
        log::info!("mounting {} results", page.publications.len());
        leptos::mount::mount_to(root, move || view! { <ResultsList page config /> }).forget();
    }

    anchors::smooth_scroll_anchors(&document).map_err(|e| anyhow!("{e:?}"))
}
