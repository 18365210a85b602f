use anyhow::{Context, Result};
use explorer_core::{results::ResultsPage, ExplorerConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub(crate) fn element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Contents of an inline `<script type="application/json">` block, if the page has one.
pub(crate) fn script_text(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .and_then(|script| script.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// A broken config block should not take the search box down with it.
pub(crate) fn load_config(json: Option<&str>) -> ExplorerConfig {
    match json.map(ExplorerConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!("ignoring explorer config: {e}");
            ExplorerConfig::default()
        }
        None => ExplorerConfig::default(),
    }
}

pub(crate) fn parse_results(json: &str) -> Result<ResultsPage> {
    serde_json::from_str(json).context("results payload is not valid")
}

/// Results to animate, or nothing when the page has none or the payload is broken.
pub(crate) fn load_results(json: Option<&str>) -> Option<ResultsPage> {
    match parse_results(json?) {
        Ok(page) => Some(page),
        Err(e) => {
            log::warn!("skipping results: {e:#}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_defaults() {
        assert_eq!(load_config(None), ExplorerConfig::default());
        assert_eq!(load_config(Some("[1, 2")), ExplorerConfig::default());
        assert_eq!(load_config(Some(r#"{"max_suggestions": 3}"#)).max_suggestions, 3);
    }

    #[test]
    fn results_payload() {
        let page = parse_results(
            r#"{"query": "radiation", "total": 2, "page": 1, "total_pages": 1,
                "publications": [
                    {"id": 0, "title": "Radiation and bone", "link": "https://example.org/0"},
                    {"id": 7, "title": "Cosmic radiation"}
                ]}"#,
        )
        .unwrap();
        assert_eq!(page.query, "radiation");
        assert_eq!(page.publications.len(), 2);
        assert_eq!(page.publications[1].link, None);
        assert!(parse_results("not json").is_err());
    }

    #[test]
    fn broken_results_payload_is_skipped() {
        assert_eq!(load_results(None), None);
        assert_eq!(load_results(Some("{\"publications\": [oops")), None);
        let page = load_results(Some(r#"{"publications": [{"id": 1, "title": "Growth"}]}"#));
        assert_eq!(page.map(|p| p.publications.len()), Some(1));
    }
}
