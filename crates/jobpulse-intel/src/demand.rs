//! Demand-sentiment scoring over a snippet corpus.

use jobpulse_core::{DemandInsight, SearchSnippet};

use crate::text::{corpus, count_occurrences};

const HIGH_PHRASES: &[&str] = &[
    "high demand",
    "urgent hiring",
    "shortage",
    "growing field",
    "expanding",
];
const MODERATE_PHRASES: &[&str] = &["steady demand", "consistent", "stable"];
const LOW_PHRASES: &[&str] = &[
    "declining",
    "saturated",
    "competitive market",
    "limited openings",
];

const HIGH_WEIGHT: i64 = 3;
const MODERATE_WEIGHT: i64 = 1;
const LOW_WEIGHT: i64 = -1;

/// Scores every occurrence of a demand phrase, so a phrase repeated across
/// snippets counts repeatedly. Returns [`DemandInsight::default`] for an
/// empty corpus.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn score_demand(snippets: &[SearchSnippet]) -> DemandInsight {
    if snippets.is_empty() {
        return DemandInsight::default();
    }

    let text = corpus(snippets);
    let mut score: i64 = 0;
    for phrase in HIGH_PHRASES {
        score += HIGH_WEIGHT * count_occurrences(&text, phrase) as i64;
    }
    for phrase in MODERATE_PHRASES {
        score += MODERATE_WEIGHT * count_occurrences(&text, phrase) as i64;
    }
    for phrase in LOW_PHRASES {
        score += LOW_WEIGHT * count_occurrences(&text, phrase) as i64;
    }

    let level = if score > 2 {
        "high"
    } else if score < -1 {
        "low"
    } else {
        "moderate"
    };
    let growth = if score > 0 { "growing" } else { "stable" };
    let confidence = (60 + 10 * score.unsigned_abs()).clamp(60, 100);

    DemandInsight {
        level: level.to_string(),
        growth: growth.to_string(),
        confidence: u32::try_from(confidence).unwrap_or(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::snippet;

    #[test]
    fn repeated_high_phrase_saturates_confidence() {
        let snippets = vec![snippet(
            "Hiring outlook",
            "high demand today, high demand tomorrow, high demand always",
        )];
        let insight = score_demand(&snippets);
        assert_eq!(insight.level, "high");
        assert_eq!(insight.growth, "growing");
        // score 9 pushes the confidence formula past its cap
        assert_eq!(insight.confidence, 100);
    }

    #[test]
    fn single_high_phrase_is_moderate_level() {
        let snippets = vec![snippet("Outlook", "engineers are in high demand")];
        let insight = score_demand(&snippets);
        assert_eq!(insight.level, "high");
        assert_eq!(insight.confidence, 90);
    }

    #[test]
    fn negative_phrases_lower_the_level() {
        let snippets = vec![snippet(
            "Outlook",
            "a declining and saturated field with limited openings",
        )];
        let insight = score_demand(&snippets);
        assert_eq!(insight.level, "low");
        assert_eq!(insight.growth, "stable");
        assert_eq!(insight.confidence, 90);
    }

    #[test]
    fn neutral_corpus_scores_moderate() {
        let snippets = vec![snippet("Outlook", "nothing notable in this blurb")];
        let insight = score_demand(&snippets);
        assert_eq!(insight.level, "moderate");
        assert_eq!(insight.confidence, 60);
    }

    #[test]
    fn empty_corpus_yields_default() {
        assert_eq!(score_demand(&[]), DemandInsight::default());
    }
}
