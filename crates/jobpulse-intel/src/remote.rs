//! Remote-work prevalence estimation.

use jobpulse_core::{RemoteWorkInsight, SearchSnippet};

use crate::text::{corpus, count_occurrences};

const REMOTE_TERMS: &[&str] = &["remote", "work from home", "wfh", "distributed", "virtual"];
const POSTING_TERMS: &[&str] = &["jobs", "positions", "openings", "roles"];

/// Share of the corpus ratio between default bounds.
const DEFAULT_PERCENTAGE: u32 = 25;
const MIN_PERCENTAGE: u32 = 10;
const MAX_PERCENTAGE: u32 = 100;

/// Estimates the remote share of postings as the ratio of remote-work terms
/// to generic posting terms. Zero posting terms yields the default 25, never
/// a division error.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn estimate_remote_share(snippets: &[SearchSnippet]) -> RemoteWorkInsight {
    let text = corpus(snippets);
    let remote_count: usize = REMOTE_TERMS
        .iter()
        .map(|term| count_occurrences(&text, term))
        .sum();
    let posting_count: usize = POSTING_TERMS
        .iter()
        .map(|term| count_occurrences(&text, term))
        .sum();

    let raw = if posting_count > 0 {
        ((remote_count as f64 / posting_count as f64) * 100.0).round() as u32
    } else {
        DEFAULT_PERCENTAGE
    };

    RemoteWorkInsight {
        percentage: raw.clamp(MIN_PERCENTAGE, MAX_PERCENTAGE),
        trend: if raw > 30 { "increasing" } else { "stable" }.to_string(),
        availability: if raw > 50 {
            "high"
        } else if raw > 25 {
            "moderate"
        } else {
            "limited"
        }
        .to_string(),
    }
}
