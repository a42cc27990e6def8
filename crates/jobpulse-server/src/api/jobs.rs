use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use jobpulse_jobs::JobQuery;

use super::{ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct JobSearchParams {
    search: Option<String>,
    location: Option<String>,
    category: Option<String>,
    company_name: Option<String>,
    limit: Option<u32>,
}

/// Always answers 200: the aggregator absorbs provider failures and
/// substitutes sample listings, tagging `source` accordingly.
pub async fn search_jobs(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<JobSearchParams>,
) -> impl IntoResponse {
    let query = JobQuery {
        search: params.search.unwrap_or_default(),
        location: params.location,
        category: params.category,
        company_name: params.company_name,
        limit: params.limit.unwrap_or(DEFAULT_LIMIT),
    };

    let response = state.aggregator.search_jobs(&query).await;
    Json(ApiResponse {
        data: response,
        meta: ResponseMeta::new(req_id.0),
    })
}
