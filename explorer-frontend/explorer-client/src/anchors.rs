use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// In-page `#anchor` links scroll smoothly to their target instead of jumping.
pub(crate) fn smooth_scroll_anchors(document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all(r##"a[href^="#"]"##)?;
    for index in 0..anchors.length() {
        let Some(anchor) = anchors
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let document = document.clone();
        EventListener::new(&anchor, "click", move |event| {
            event.prevent_default();
            // a bare "#" is not a valid selector
            if let Ok(Some(target)) = document.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
        .forget();
    }
    Ok(())
}
