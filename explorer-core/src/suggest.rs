/// First `limit` terms containing `query`, compared case-insensitively, in list order.
pub fn suggest<S: AsRef<str>>(query: &str, terms: &[S], limit: usize) -> Vec<String> {
    let query = query.to_lowercase();
    terms
        .iter()
        .map(|term| term.as_ref())
        .filter(|term: &&str| term.to_lowercase().contains(&query))
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// What the suggestion panel should do for a settled query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelAction {
    Refresh(String),
    Hide,
}

impl PanelAction {
    pub fn for_query(query: &str, min_len: usize) -> Self {
        if query.chars().count() >= min_len {
            PanelAction::Refresh(query.to_string())
        } else {
            PanelAction::Hide
        }
    }
}
