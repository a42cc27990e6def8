//! Report assembly: fans out the facet queries and feeds each extractor.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;

use jobpulse_core::{MarketIntelligenceReport, SearchSnippet};
use jobpulse_search::{SearchClient, SearchError};

use crate::companies::extract_companies;
use crate::demand::score_demand;
use crate::error::IntelError;
use crate::remote::estimate_remote_share;
use crate::salary::extract_salary;
use crate::skills::extract_skills;

const RESULTS_PER_FACET: u32 = 5;
const SKILLS_QUERY_RESULTS: u32 = 10;
const GEO_HINT: &str = "us";

/// Market-intelligence service over one search client.
///
/// Each report issues five facet queries in parallel. A failed facet query is
/// logged and its extractor falls back to the default; the report as a whole
/// fails only when every facet query fails.
pub struct MarketIntel {
    search: SearchClient,
}

/// Lightweight snapshot for the stats endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MarketStats {
    pub job_title: String,
    pub location: String,
    pub result_count: usize,
    pub top_result: String,
    pub last_updated: DateTime<Utc>,
}

/// Skills currently surfacing for a job title.
#[derive(Debug, Clone, Serialize)]
pub struct TrendingSkills {
    pub job_title: String,
    pub location: String,
    pub skills: Vec<String>,
    pub count: usize,
    pub last_updated: DateTime<Utc>,
}

impl MarketIntel {
    #[must_use]
    pub fn new(search: SearchClient) -> Self {
        Self { search }
    }

    /// Builds the full five-facet report for a job title and location.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError::SearchUnavailable`] only when all five facet
    /// queries fail.
    pub async fn market_intelligence(
        &self,
        job_title: &str,
        location: &str,
    ) -> Result<MarketIntelligenceReport, IntelError> {
        let queries = [
            format!("{job_title} average salary {location} 2024"),
            format!("{job_title} job demand trends {location}"),
            format!("top companies hiring {job_title} {location}"),
            format!("{job_title} skills requirements 2024"),
            format!("remote {job_title} jobs statistics"),
        ];

        let results = join_all(
            queries
                .iter()
                .map(|query| self.search.search(query, RESULTS_PER_FACET, GEO_HINT)),
        )
        .await;

        if results.iter().all(Result::is_err) {
            let cause = results
                .into_iter()
                .find_map(Result::err)
                .map_or_else(|| "no facet queries issued".to_owned(), |e| e.to_string());
            tracing::error!(job_title, location, cause, "all facet queries failed");
            return Err(IntelError::SearchUnavailable(cause));
        }

        let mut slots = results.into_iter();
        let salary_corpus = recover(slots.next(), "salary");
        let demand_corpus = recover(slots.next(), "demand");
        let company_corpus = recover(slots.next(), "employers");
        let skills_corpus = recover(slots.next(), "skills");
        let remote_corpus = recover(slots.next(), "remote");

        Ok(MarketIntelligenceReport {
            salary: extract_salary(&salary_corpus),
            demand: score_demand(&demand_corpus),
            top_employers: extract_companies(&company_corpus),
            skill_requirements: extract_skills(&skills_corpus),
            remote_work: estimate_remote_share(&remote_corpus),
            generated_at: Utc::now(),
        })
    }

    /// Quick result-volume snapshot for a job title.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`SearchError`]; there is only one query,
    /// so there is no partial-degradation path.
    pub async fn market_stats(
        &self,
        job_title: &str,
        location: &str,
    ) -> Result<MarketStats, IntelError> {
        let query = format!("{job_title} jobs {location} 2024");
        let snippets = self.search.search(&query, RESULTS_PER_FACET, GEO_HINT).await?;

        Ok(MarketStats {
            job_title: job_title.to_owned(),
            location: location.to_owned(),
            result_count: snippets.len(),
            top_result: snippets
                .first()
                .map_or_else(|| "No results found".to_owned(), |s| s.title.clone()),
            last_updated: Utc::now(),
        })
    }

    /// Skills mined from a dedicated trending-technologies query.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`SearchError`].
    pub async fn trending_skills(
        &self,
        job_title: &str,
        location: &str,
    ) -> Result<TrendingSkills, IntelError> {
        let query = format!("{job_title} required skills trending technologies {location} 2024");
        let snippets = self
            .search
            .search(&query, SKILLS_QUERY_RESULTS, GEO_HINT)
            .await?;
        let skills = extract_skills(&snippets);

        Ok(TrendingSkills {
            job_title: job_title.to_owned(),
            location: location.to_owned(),
            count: skills.len(),
            skills,
            last_updated: Utc::now(),
        })
    }
}

/// Unwraps one facet query result, logging and substituting an empty corpus
/// on failure so the extractor degrades to its default.
fn recover(
    result: Option<Result<Vec<SearchSnippet>, SearchError>>,
    facet: &str,
) -> Vec<SearchSnippet> {
    match result {
        Some(Ok(snippets)) => snippets,
        Some(Err(error)) => {
            tracing::warn!(facet, %error, "facet query failed, extractor will use defaults");
            Vec::new()
        }
        None => Vec::new(),
    }
}
