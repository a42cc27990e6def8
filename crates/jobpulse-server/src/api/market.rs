use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;

use jobpulse_intel::MarketIntel;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

const DEFAULT_LOCATION: &str = "United States";

#[derive(Debug, Deserialize)]
pub struct LocationParam {
    location: Option<String>,
}

/// Full five-facet report for a job title and location.
pub async fn intelligence(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((job_title, location)): Path<(String, String)>,
) -> Response {
    let Some(intel) = require_intel(&state, &req_id.0) else {
        return disabled_error(req_id.0).into_response();
    };

    match intel.market_intelligence(&job_title, &location).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: report,
                meta: ResponseMeta::new(req_id.0),
            }),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, job_title, location, "market intelligence failed");
            ApiError::new(req_id.0, "bad_gateway", "search backend unavailable").into_response()
        }
    }
}

/// Quick result-volume stats; `location` defaults to "United States".
pub async fn stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(job_title): Path<String>,
    Query(params): Query<LocationParam>,
) -> Response {
    let Some(intel) = require_intel(&state, &req_id.0) else {
        return disabled_error(req_id.0).into_response();
    };
    let location = params.location.as_deref().unwrap_or(DEFAULT_LOCATION);

    match intel.market_stats(&job_title, location).await {
        Ok(stats) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: stats,
                meta: ResponseMeta::new(req_id.0),
            }),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, job_title, "market stats failed");
            ApiError::new(req_id.0, "bad_gateway", "search backend unavailable").into_response()
        }
    }
}

/// Trending skills; `location` defaults to "United States".
pub async fn trending_skills(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(job_title): Path<String>,
    Query(params): Query<LocationParam>,
) -> Response {
    let Some(intel) = require_intel(&state, &req_id.0) else {
        return disabled_error(req_id.0).into_response();
    };
    let location = params.location.as_deref().unwrap_or(DEFAULT_LOCATION);

    match intel.trending_skills(&job_title, location).await {
        Ok(skills) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: skills,
                meta: ResponseMeta::new(req_id.0),
            }),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, job_title, "trending skills failed");
            ApiError::new(req_id.0, "bad_gateway", "search backend unavailable").into_response()
        }
    }
}

fn require_intel<'a>(state: &'a AppState, request_id: &str) -> Option<&'a Arc<MarketIntel>> {
    if state.intel.is_none() {
        tracing::warn!(request_id, "market route hit with intelligence disabled");
    }
    state.intel.as_ref()
}

fn disabled_error(request_id: String) -> ApiError {
    ApiError::new(
        request_id,
        "service_unavailable",
        "market intelligence is disabled; no search API key configured",
    )
}
