use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized job listing, built fresh per request from a provider response
/// or from the local sample set. Never persisted.
///
/// Identity is provider-scoped: `source_provider` plus the provider-native
/// `id`. No cross-provider reconciliation is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub company_logo_url: String,
    pub category: String,
    pub employment_type: String,
    /// Publication timestamp as reported by the provider. Kept as an opaque
    /// string because provider date formats vary.
    pub published_at: String,
    pub required_location: String,
    pub salary_text: String,
    pub description: String,
    pub detail_url: String,
    pub tags: Vec<String>,
    pub source_provider: String,
}

/// The atomic unit mined by the intelligence extractors: one titled search
/// result. Consumed immediately after retrieval, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
    pub body_text: String,
    pub source_url: String,
}

impl SearchSnippet {
    /// Title and body joined with a space, the text every extractor scans.
    #[must_use]
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.body_text)
    }
}

/// Salary figures mined from search snippets.
///
/// `average` and `range` are display strings (e.g. `"$95,000"`); `"N/A"`
/// means no parsable figure survived the plausibility filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInsight {
    pub average: String,
    pub range: String,
    pub trend: String,
    pub sample_size: usize,
}

impl Default for SalaryInsight {
    fn default() -> Self {
        Self {
            average: "N/A".to_string(),
            range: "N/A".to_string(),
            trend: "stable".to_string(),
            sample_size: 0,
        }
    }
}

/// Hiring-demand signal derived from keyword-bucket scoring.
///
/// `confidence` is a percentage in `[60, 100]`: baseline 60, rising with
/// signal strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandInsight {
    pub level: String,
    pub growth: String,
    pub confidence: u32,
}

impl Default for DemandInsight {
    fn default() -> Self {
        Self {
            level: "moderate".to_string(),
            growth: "stable".to_string(),
            confidence: 60,
        }
    }
}

/// Remote-work prevalence estimate.
///
/// `percentage` defaults to 25 when no job-posting terms appear in the
/// corpus, and is clamped to `[10, 100]` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteWorkInsight {
    pub percentage: u32,
    pub trend: String,
    pub availability: String,
}

impl Default for RemoteWorkInsight {
    fn default() -> Self {
        Self {
            percentage: 25,
            trend: "stable".to_string(),
            availability: "limited".to_string(),
        }
    }
}

/// Market-intelligence report assembled from five independent extractors
/// over five dedicated snippet corpora. Every field degrades to its
/// `Default` when its sub-query fails or yields nothing parsable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketIntelligenceReport {
    pub salary: SalaryInsight,
    pub demand: DemandInsight,
    pub top_employers: Vec<String>,
    pub skill_requirements: Vec<String>,
    pub remote_work: RemoteWorkInsight,
    pub generated_at: DateTime<Utc>,
}
