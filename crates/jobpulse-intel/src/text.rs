//! Shared text helpers for the extractors.

use jobpulse_core::SearchSnippet;

/// Lowercased concatenation of every snippet's title and body.
pub(crate) fn corpus(snippets: &[SearchSnippet]) -> String {
    snippets
        .iter()
        .map(SearchSnippet::combined_text)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Non-overlapping occurrence count of `needle` in `haystack`.
pub(crate) fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[cfg(test)]
pub(crate) fn snippet(title: &str, body: &str) -> SearchSnippet {
    SearchSnippet {
        title: title.to_string(),
        body_text: body.to_string(),
        source_url: "https://example.com".to_string(),
    }
}
