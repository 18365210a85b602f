use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PublicationSummary {
    pub id: u64,
    pub title: String,
    /// Link to the full text, when the catalogue has one.
    #[serde(default)]
    pub link: Option<String>,
}

impl PublicationSummary {
    pub fn detail_url(&self) -> String {
        format!("/publication/{}", self.id)
    }
}

/// The result set the server already rendered for this page.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
#[serde(default)]
pub struct ResultsPage {
    pub query: String,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
    pub publications: Vec<PublicationSummary>,
}

pub fn stagger_delay(index: usize, step_ms: u64) -> Duration {
    Duration::from_millis(step_ms.saturating_mul(index as u64))
}

pub fn format_results_count(count: u64) -> String {
    match count {
        0 => "No results".to_string(),
        1 => "1 result".to_string(),
        2..=999 => format!("{count} results"),
        _ => format!("{:.1}k results", count as f64 / 1000.0),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Marked(String),
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Splits `text` into plain and marked runs, marking every case-insensitive occurrence of
/// each query word longer than two characters.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let folded: Vec<char> = chars.iter().copied().map(fold).collect();
    let mut marked = vec![false; chars.len()];

    for word in query.split(' ') {
        let word: Vec<char> = word.chars().map(fold).collect();
        if word.len() <= 2 || word.len() > folded.len() {
            continue;
        }
        for start in 0..=folded.len() - word.len() {
            if folded[start..start + word.len()] == word[..] {
                marked[start..start + word.len()].fill(true);
            }
        }
    }

    let mut segments = Vec::new();
    let mut run = String::new();
    let mut run_marked = false;
    for (c, is_marked) in chars.into_iter().zip(marked) {
        if is_marked != run_marked && !run.is_empty() {
            let finished = std::mem::take(&mut run);
            segments.push(if run_marked {
                Segment::Marked(finished)
            } else {
                Segment::Plain(finished)
            });
        }
        run_marked = is_marked;
        run.push(c);
    }
    if !run.is_empty() {
        segments.push(if run_marked {
            Segment::Marked(run)
        } else {
            Segment::Plain(run)
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Segment {
        Segment::Plain(s.to_string())
    }

    fn marked(s: &str) -> Segment {
        Segment::Marked(s.to_string())
    }

    #[test]
    fn results_count_wording() {
        assert_eq!(format_results_count(0), "No results");
        assert_eq!(format_results_count(1), "1 result");
        assert_eq!(format_results_count(42), "42 results");
        assert_eq!(format_results_count(999), "999 results");
        assert_eq!(format_results_count(1500), "1.5k results");
        assert_eq!(format_results_count(12_340), "12.3k results");
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay(0, 100), Duration::ZERO);
        assert_eq!(stagger_delay(3, 100), Duration::from_millis(300));
    }

    #[test]
    fn highlights_query_words_ignoring_case() {
        assert_eq!(
            highlight("Bone loss in Microgravity", "microgravity BONE"),
            vec![
                marked("Bone"),
                plain(" loss in "),
                marked("Microgravity")
            ]
        );
    }

    #[test]
    fn short_words_are_not_marked() {
        assert_eq!(
            highlight("Effects of spaceflight on mice", "of on"),
            vec![plain("Effects of spaceflight on mice")]
        );
    }

    #[test]
    fn overlapping_matches_merge() {
        assert_eq!(
            highlight("cellular cells", "cell cellular"),
            vec![marked("cellular"), plain(" "), marked("cell"), plain("s")]
        );
    }

    #[test]
    fn empty_inputs() {
        assert!(highlight("", "radiation").is_empty());
        assert_eq!(highlight("Radiation", ""), vec![plain("Radiation")]);
    }

    #[test]
    fn payload_defaults() {
        let page: ResultsPage = serde_json::from_str(
            r#"{"query": "bone", "publications": [{"id": 3, "title": "Bone density"}]}"#,
        )
        .unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.publications[0].link, None);
        assert_eq!(page.publications[0].detail_url(), "/publication/3");
    }
}
