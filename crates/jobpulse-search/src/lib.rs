//! Web-search client for JobPulse.
//!
//! Wraps a Serper-style search API (JSON POST, `X-API-KEY` header) and
//! returns titled snippets for the market-intelligence extractors to mine.

mod client;
mod error;

pub use client::SearchClient;
pub use error::SearchError;
