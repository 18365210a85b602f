use crate::error::ExplorerResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TERMS: [&str; 24] = [
    "microgravity",
    "space flight",
    "cell biology",
    "radiation",
    "bone density",
    "muscle atrophy",
    "plant biology",
    "protein",
    "gene expression",
    "immune system",
    "metabolism",
    "oxidative stress",
    "cardiovascular",
    "neural",
    "development",
    "growth",
    "space station",
    "astronaut",
    "biomarker",
    "tissue",
    "molecular",
    "cellular",
    "physiological",
    "biological",
];

const DEFAULT_QUICK_SEARCHES: [&str; 4] =
    ["microgravity", "radiation", "bone density", "plant biology"];

/// Tunables for the search page. Every field can be overridden by the host page,
/// anything left out keeps its default.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    pub terms: Vec<String>,
    pub max_suggestions: usize,
    /// Queries shorter than this never open the suggestion panel.
    pub min_query_len: usize,
    pub debounce_ms: u64,
    pub notice_ms: u64,
    pub submit_restore_ms: u64,
    pub stagger_ms: u64,
    pub click_pulse_ms: u64,
    pub click_pulse_opacity: f64,
    pub quick_searches: Vec<String>,
    pub search_action: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS.iter().map(|t| t.to_string()).collect(),
            max_suggestions: 6,
            min_query_len: 2,
            debounce_ms: 300,
            notice_ms: 3000,
            submit_restore_ms: 10_000,
            stagger_ms: 100,
            click_pulse_ms: 200,
            click_pulse_opacity: 0.7,
            quick_searches: DEFAULT_QUICK_SEARCHES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            search_action: "/search".to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn from_json(json: &str) -> ExplorerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(terms = config.terms.len(), "loaded explorer config");
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn notice(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    pub fn submit_restore(&self) -> Duration {
        Duration::from_millis(self.submit_restore_ms)
    }

    pub fn click_pulse(&self) -> Duration {
        Duration::from_millis(self.click_pulse_ms)
    }
}
