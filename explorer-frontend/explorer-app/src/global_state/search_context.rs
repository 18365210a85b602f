use explorer_core::{
    suggest::{suggest, PanelAction},
    ExplorerConfig,
};
use leptos::{
    html::{Form, Input},
    prelude::*,
};

/// Everything the search handlers touch: the config, the query and panel state, and the
/// form elements. Built once per mounted search panel and shared through context.
#[derive(Clone, Copy)]
pub struct SearchContext {
    pub config: StoredValue<ExplorerConfig>,
    pub query: RwSignal<String>,
    pub suggestions: RwSignal<Vec<String>>,
    pub panel_open: RwSignal<bool>,
    pub input: NodeRef<Input>,
    pub form: NodeRef<Form>,
}

impl SearchContext {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            query: RwSignal::new(String::new()),
            suggestions: RwSignal::new(Vec::new()),
            panel_open: RwSignal::new(false),
            input: NodeRef::new(),
            form: NodeRef::new(),
        }
    }

    pub fn show(&self, suggestions: Vec<String>) {
        if suggestions.is_empty() {
            self.hide();
            return;
        }
        self.suggestions.set(suggestions);
        self.panel_open.set(true);
    }

    pub fn hide(&self) {
        if self.panel_open.get_untracked() {
            self.panel_open.set(false);
        }
    }

    pub fn refresh(&self, query: &str) {
        let found = self
            .config
            .with_value(|c| suggest(query, &c.terms, c.max_suggestions));
        self.show(found);
    }

    /// Acts on a query that has stopped changing.
    pub fn settle(&self, query: &str) {
        let min_len = self.config.with_value(|c| c.min_query_len);
        match PanelAction::for_query(query, min_len) {
            PanelAction::Refresh(query) => self.refresh(&query),
            PanelAction::Hide => self.hide(),
        }
    }

    /// Brings suggestions back when the box regains focus. Never closes the panel.
    pub fn reshow(&self, query: &str) {
        let query = query.trim();
        let min_len = self.config.with_value(|c| c.min_query_len);
        if query.chars().count() >= min_len {
            self.refresh(query);
        }
    }

    /// Puts `value` in the search box and searches for it right away.
    pub fn select(&self, value: String) {
        if let Some(input) = self.input.get_untracked() {
            input.set_value(&value);
        }
        self.query.set(value);
        self.hide();
        self.submit();
    }

    pub fn submit(&self) {
        if let Some(form) = self.form.get_untracked() {
            // goes through the submit handler, unlike form.submit()
            if let Err(e) = form.request_submit() {
                log::warn!("unable to submit search form {e:?}");
            }
        }
    }
}

pub fn provide_search_context(config: ExplorerConfig) -> SearchContext {
    let context = SearchContext::new(config);
    provide_context(context);
    context
}

pub fn use_search_context() -> Option<SearchContext> {
    use_context::<SearchContext>()
}
