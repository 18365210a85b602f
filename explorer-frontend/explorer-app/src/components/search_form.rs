use crate::{
    components::{loading::Searching, search_box::SearchBox, suggestion_panel::SuggestionPanel},
    global_state::search_context::use_search_context,
    timers::{cancel_timer, release_listeners, restart_timer, ListenerSlot, TimerSlot},
};
use explorer_core::submit_guard::{SubmitGuard, SubmitOutcome};
use leptos::{
    ev::{self, SubmitEvent},
    leptos_dom::helpers::window_event_listener,
    prelude::*,
};

#[component]
pub fn SearchForm() -> impl IntoView {
    let Some(ctx) = use_search_context() else {
        log::warn!("SearchForm rendered outside of a search panel");
        return ().into_any();
    };
    let (notice_delay, restore_delay, action) = ctx
        .config
        .with_value(|c| (c.notice(), c.submit_restore(), c.search_action.clone()));

    let guard = StoredValue::new(SubmitGuard::default());
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let notice_timer: TimerSlot = StoredValue::new(None);
    let valve_timer: TimerSlot = StoredValue::new(None);

    // leaving the page settles the search; coming back from the back/forward cache
    // should not find the button still spinning
    let page_listeners: ListenerSlot = StoredValue::new_local(vec![
        window_event_listener(ev::pagehide, move |_| {
            if guard.try_update_value(SubmitGuard::settle).flatten().is_some() {
                cancel_timer(valve_timer);
            }
        }),
        window_event_listener(ev::pageshow, move |event| {
            if event.persisted() {
                busy.set(false);
            }
        }),
    ]);
    on_cleanup(move || {
        release_listeners(page_listeners);
        cancel_timer(notice_timer);
        cancel_timer(valve_timer);
    });

    let on_submit = move |ev: SubmitEvent| {
        let raw = ctx
            .input
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_else(|| ctx.query.get_untracked());
        let Some(outcome) = guard.try_update_value(|g| g.attempt(&raw)) else {
            return;
        };
        match outcome {
            SubmitOutcome::Blocked { token, replaced } => {
                ev.prevent_default();
                log::debug!("empty search blocked, notice replaced: {replaced}");
                notice.set(guard.with_value(|g| g.notice().map(|n| n.message.clone())));
                restart_timer(notice_timer, notice_delay, move || {
                    if guard.try_update_value(|g| g.dismiss(token)).unwrap_or_default() {
                        notice.set(None);
                    }
                });
            }
            SubmitOutcome::Allowed { query, token } => {
                log::debug!("searching for {query}");
                ctx.hide();
                cancel_timer(notice_timer);
                notice.set(None);
                busy.set(true);
                restart_timer(valve_timer, restore_delay, move || {
                    if guard.try_update_value(|g| g.restore(token)).unwrap_or_default() {
                        busy.set(false);
                    }
                });
            }
            SubmitOutcome::InFlight => ev.prevent_default(),
        }
    };

    view! {
        <form node_ref=ctx.form id="searchForm" action=action method="get" on:submit=on_submit>
            <div class="search-container position-relative">
                <div class="input-group">
                    <SearchBox />
                    <button type="submit" class="btn btn-primary btn-lg" prop:disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                view! { <Searching /> }.into_any()
                            } else {
                                view! { <i class="fas fa-search me-2"></i> "Search" }.into_any()
                            }
                        }}
                    </button>
                </div>
                <SuggestionPanel />
            </div>
            {move || {
                notice
                    .get()
                    .map(|message| {
                        view! {
                            <div class="alert alert-danger search-error mt-2" role="alert">
                                <i class="fas fa-exclamation-triangle me-2"></i>
                                {message}
                            </div>
                        }
                    })
            }}
        </form>
    }
    .into_any()
}
