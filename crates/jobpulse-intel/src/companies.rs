//! Company-name extraction from search snippets.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use jobpulse_core::SearchSnippet;

// Case-insensitive trigger words, capitalized capture. `\s` crossing line
// boundaries and the greedy letter class both over-capture on messy prose,
// which the length filter below mostly absorbs.
static PRECEDED_BY_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:at|join|work for|hiring at)\s+([A-Z][A-Za-z\s&]+(?:Inc|LLC|Corp|Ltd)?)")
        .expect("company pattern is valid")
});
static FOLLOWED_BY_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Za-z\s&]+(?:Inc|LLC|Corp|Ltd|Company))\s+(?i:is hiring|jobs|careers)")
        .expect("company pattern is valid")
});

const MAX_COMPANIES: usize = 10;
const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 49;

/// Extracts up to ten employer names in first-seen order, deduplicated.
#[must_use]
pub fn extract_companies(snippets: &[SearchSnippet]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut companies: Vec<String> = Vec::new();

    for snippet in snippets {
        let text = snippet.combined_text();
        for pattern in [&*PRECEDED_BY_TRIGGER, &*FOLLOWED_BY_TRIGGER] {
            for caps in pattern.captures_iter(&text) {
                let candidate = caps[1].trim().to_string();
                if candidate.len() < MIN_NAME_LEN || candidate.len() > MAX_NAME_LEN {
                    continue;
                }
                if seen.insert(candidate.clone()) {
                    companies.push(candidate);
                }
            }
        }
    }

    companies.truncate(MAX_COMPANIES);
    companies
}
