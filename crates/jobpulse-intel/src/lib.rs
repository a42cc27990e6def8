//! Market-intelligence text mining for JobPulse.
//!
//! Issues targeted web searches for one job title and location, then runs
//! five independent extractors over the snippet corpora: salary figures,
//! demand sentiment, company names, skill keywords, and remote-work
//! prevalence. Each extractor is a pure function of a snippet list and
//! degrades to a documented default on empty or unparsable input.

mod companies;
mod demand;
mod error;
mod remote;
mod report;
mod salary;
mod skills;
mod text;
mod trend;

pub use companies::extract_companies;
pub use demand::score_demand;
pub use error::IntelError;
pub use remote::estimate_remote_share;
pub use report::{MarketIntel, MarketStats, TrendingSkills};
pub use salary::extract_salary;
pub use skills::extract_skills;
pub use trend::trend_polarity;
