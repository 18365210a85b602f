use crate::{
    global_state::search_context::use_search_context,
    timers::{cancel_timer, now_ms, restart_timer},
};
use explorer_core::debounce::Debouncer;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

#[component]
pub fn SearchBox(
    #[prop(into, default = "Search publications, e.g. microgravity or bone density".to_string())]
    placeholder: String,
) -> impl IntoView {
    let Some(ctx) = use_search_context() else {
        log::warn!("SearchBox rendered outside of a search panel");
        return ().into_any();
    };
    let (window_ms, delay) = ctx.config.with_value(|c| (c.debounce_ms, c.debounce()));
    let debouncer = StoredValue::new(Debouncer::<String>::new(window_ms));
    let countdown = StoredValue::new(None);

    on_cleanup(move || {
        cancel_timer(countdown);
        debouncer.update_value(|d| d.cancel());
    });

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        ctx.query.set(value.clone());
        let Some(ticket) = debouncer.try_update_value(|d| d.push(value, now_ms())) else {
            return;
        };
        restart_timer(countdown, delay, move || {
            if let Some(query) = debouncer.try_update_value(|d| d.expire(ticket)).flatten() {
                ctx.settle(&query);
            }
        });
    };
    let keydown = move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            ctx.hide();
        }
    };
    let focus_in = move |_| ctx.reshow(&ctx.query.get_untracked());

    view! {
        <input
            node_ref=ctx.input
            id="searchInput"
            name="q"
            type="text"
            class="form-control form-control-lg"
            autocomplete="off"
            placeholder=placeholder
            on:input=on_input
            on:keydown=keydown
            on:focus=focus_in
            prop:value=move || ctx.query.get()
        />
    }
    .into_any()
}
