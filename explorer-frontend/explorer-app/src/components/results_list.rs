use explorer_core::{
    results::{format_results_count, highlight, stagger_delay, PublicationSummary, ResultsPage, Segment},
    ExplorerConfig,
};
use crate::timers::{cancel_timer, restart_timer, TimerSlot};
use gloo_timers::future::TimeoutFuture;
use leptos::{ev::MouseEvent, prelude::*, task::spawn_local};

fn card_class(visible: bool) -> &'static str {
    if visible {
        "card publication-card mb-3 fade-in"
    } else {
        "card publication-card mb-3"
    }
}

/// Inline style for a card. Only the click pulse sets an opacity, otherwise the
/// stylesheet's entrance rules stay in charge.
fn card_style(opacity: f64) -> String {
    if opacity < 1.0 {
        format!("opacity: {opacity}")
    } else {
        String::new()
    }
}

#[component]
fn Highlighted(text: String, query: String) -> impl IntoView {
    highlight(&text, &query)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.into_any(),
            Segment::Marked(text) => view! { <mark>{text}</mark> }.into_any(),
        })
        .collect_view()
}

#[component]
fn PublicationCard(
    publication: PublicationSummary,
    index: usize,
    query: String,
    config: ExplorerConfig,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let opacity = RwSignal::new(1.0_f64);

    let delay = stagger_delay(index, config.stagger_ms);
    let entrance: TimerSlot = StoredValue::new(None);
    Effect::new(move |_| {
        restart_timer(entrance, delay, move || visible.set(true));
    });
    on_cleanup(move || cancel_timer(entrance));

    let dimmed = config.click_pulse_opacity;
    let pulse_ms = u32::try_from(config.click_pulse_ms).unwrap_or(u32::MAX);
    // cosmetic only, the link navigates as usual
    let on_action = move |_: MouseEvent| {
        opacity.set(dimmed);
        spawn_local(async move {
            TimeoutFuture::new(pulse_ms).await;
            opacity.set(1.0);
        });
    };

    let detail_url = publication.detail_url();
    view! {
        <div
            class=move || card_class(visible.get())
            style=move || card_style(opacity.get())
        >
            <div class="card-body">
                <h5 class="card-title">
                    <Highlighted text=publication.title query />
                </h5>
                <div class="d-flex gap-2">
                    <a class="btn btn-primary btn-sm" href=detail_url on:click=on_action>
                        <i class="fas fa-microscope me-1"></i>
                        "Explore"
                    </a>
                    {publication
                        .link
                        .map(|link| {
                            view! {
                                <a
                                    class="btn btn-outline-secondary btn-sm"
                                    href=link
                                    target="_blank"
                                    rel="noopener"
                                    on:click=on_action
                                >
                                    "Full text"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

/// Cards for a result set the host page already chose, with the staggered entrance.
#[component]
pub fn ResultsList(page: ResultsPage, #[prop(optional)] config: ExplorerConfig) -> impl IntoView {
    let shown = page.publications.len() as u64;
    let count = format_results_count(page.total.max(shown));
    let page_label = (page.total_pages > 1)
        .then(|| format!("Page {} of {}", page.page.max(1), page.total_pages));
    let query = page.query;

    view! {
        <div class="search-results">
            <p class="results-count text-muted">{count}</p>
            {page
                .publications
                .into_iter()
                .enumerate()
                .map(|(index, publication)| {
                    view! {
                        <PublicationCard
                            publication
                            index
                            query=query.clone()
                            config=config.clone()
                        />
                    }
                })
                .collect_view()}
            {page_label.map(|label| view! { <p class="results-page text-muted">{label}</p> })}
        </div>
    }
}
