use leptos::prelude::*;

#[component]
pub fn Searching() -> impl IntoView {
    view! {
        <span class="spinner-border spinner-border-sm me-2" role="status"></span>
        "Searching..."
    }
}
