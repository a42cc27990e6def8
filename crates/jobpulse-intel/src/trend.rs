//! Directional trend polarity over a snippet corpus.

use jobpulse_core::SearchSnippet;

use crate::text::{corpus, count_occurrences};

const POSITIVE_TERMS: &[&str] = &["increasing", "rising", "growing", "upward", "boom"];
const NEGATIVE_TERMS: &[&str] = &["decreasing", "falling", "declining", "downward", "shrinking"];

/// Counts positive and negative movement terms and reports the majority
/// direction, `"stable"` on a tie or an empty corpus.
#[must_use]
pub fn trend_polarity(snippets: &[SearchSnippet]) -> String {
    let text = corpus(snippets);
    let positive: usize = POSITIVE_TERMS
        .iter()
        .map(|term| count_occurrences(&text, term))
        .sum();
    let negative: usize = NEGATIVE_TERMS
        .iter()
        .map(|term| count_occurrences(&text, term))
        .sum();

    if positive > negative {
        "increasing".to_string()
    } else if negative > positive {
        "decreasing".to_string()
    } else {
        "stable".to_string()
    }
}
