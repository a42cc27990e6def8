//! Integration tests for `JobAggregator` using wiremock provider stubs.

use jobpulse_core::ProviderStrategy;
use jobpulse_jobs::{AggregatorConfig, JobAggregator, JobQuery, ProviderAdapter, RemotiveProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(strategy: ProviderStrategy) -> AggregatorConfig {
    AggregatorConfig {
        provider_timeout_secs: 5,
        user_agent: "jobpulse-test/0.1".to_string(),
        strategy,
        cache_ttl_secs: 600,
        min_request_interval_secs: 0,
    }
}

fn provider(name: &str, server: &MockServer) -> Box<dyn ProviderAdapter> {
    Box::new(RemotiveProvider::with_base_url(name, &server.uri()))
}

fn remotive_body(jobs: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "job-count": jobs.as_array().map_or(0, Vec::len),
        "jobs": jobs
    })
}

async fn mount_jobs(server: &MockServer, jobs: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/remote-jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remotive_body(jobs)))
        .mount(server)
        .await;
}

async fn mount_failure(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/api/remote-jobs"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

#[tokio::test]
async fn parallel_merge_concatenates_provider_results() {
    let server_a = MockServer::start().await;
    let server_b = MockServer::start().await;

    mount_jobs(
        &server_a,
        serde_json::json!([{
            "id": 1,
            "title": "Rust Engineer",
            "company_name": "Ferrous",
            "candidate_required_location": "Worldwide",
            "tags": ["rust"]
        }]),
    )
    .await;
    mount_jobs(
        &server_b,
        serde_json::json!([{
            "id": 2,
            "title": "Backend Engineer",
            "company_name": "Acme",
            "candidate_required_location": "Remote, USA",
            "tags": ["go"]
        }]),
    )
    .await;

    let aggregator = JobAggregator::with_providers(
        &test_config(ProviderStrategy::ParallelMerge),
        vec![provider("Remotive.io", &server_a), provider("Remotive.com", &server_b)],
    )
    .expect("aggregator");

    let response = aggregator
        .search_jobs(&JobQuery::new("engineer", None, 20))
        .await;

    assert_eq!(response.jobs.len(), 2);
    assert_eq!(response.total, 2);
    assert_eq!(response.source, "Remotive.io+Remotive.com");
    assert!(response.message.is_none());
}

#[tokio::test]
async fn parallel_merge_absorbs_individual_provider_failure() {
    let healthy = MockServer::start().await;
    let broken = MockServer::start().await;

    mount_jobs(
        &healthy,
        serde_json::json!([{
            "id": 5,
            "title": "Data Engineer",
            "company_name": "DataFlow",
            "candidate_required_location": "Remote"
        }]),
    )
    .await;
    mount_failure(&broken, 500).await;

    let aggregator = JobAggregator::with_providers(
        &test_config(ProviderStrategy::ParallelMerge),
        vec![provider("Remotive.io", &broken), provider("Remotive.com", &healthy)],
    )
    .expect("aggregator");

    let response = aggregator
        .search_jobs(&JobQuery::new("data", None, 20))
        .await;

    assert_eq!(response.jobs.len(), 1);
    assert_eq!(response.source, "Remotive.com");
}

#[tokio::test]
async fn sequential_short_circuits_on_first_non_empty_success() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    mount_jobs(
        &first,
        serde_json::json!([{
            "id": 9,
            "title": "Platform Engineer",
            "company_name": "CloudTech",
            "candidate_required_location": "Remote"
        }]),
    )
    .await;
    // The second provider must never be called.
    Mock::given(method("GET"))
        .and(path("/api/remote-jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remotive_body(serde_json::json!([]))))
        .expect(0)
        .mount(&second)
        .await;

    let aggregator = JobAggregator::with_providers(
        &test_config(ProviderStrategy::Sequential),
        vec![provider("Remotive.io", &first), provider("Remotive.com", &second)],
    )
    .expect("aggregator");

    let response = aggregator
        .search_jobs(&JobQuery::new("platform", None, 20))
        .await;

    assert_eq!(response.source, "Remotive.io");
    assert_eq!(response.jobs.len(), 1);
}

#[tokio::test]
async fn sequential_falls_through_failed_provider() {
    let broken = MockServer::start().await;
    let healthy = MockServer::start().await;

    mount_failure(&broken, 503).await;
    mount_jobs(
        &healthy,
        serde_json::json!([{
            "id": 11,
            "title": "QA Engineer",
            "company_name": "QualityWorks",
            "candidate_required_location": "Worldwide"
        }]),
    )
    .await;

    let aggregator = JobAggregator::with_providers(
        &test_config(ProviderStrategy::Sequential),
        vec![provider("Remotive.io", &broken), provider("Remotive.com", &healthy)],
    )
    .expect("aggregator");

    let response = aggregator.search_jobs(&JobQuery::new("qa", None, 20)).await;

    assert_eq!(response.source, "Remotive.com");
    assert_eq!(response.jobs.len(), 1);
}

#[tokio::test]
async fn all_providers_failing_yields_mock_source_with_content() {
    let broken_a = MockServer::start().await;
    let broken_b = MockServer::start().await;
    mount_failure(&broken_a, 500).await;
    mount_failure(&broken_b, 502).await;

    let aggregator = JobAggregator::with_providers(
        &test_config(ProviderStrategy::ParallelMerge),
        vec![provider("Remotive.io", &broken_a), provider("Remotive.com", &broken_b)],
    )
    .expect("aggregator");

    let response = aggregator
        .search_jobs(&JobQuery::new("engineer", None, 20))
        .await;

    assert_eq!(response.source, "mock");
    assert!(
        !response.jobs.is_empty(),
        "sample scorer must supply content for a non-trivial query"
    );
    assert!(response.message.is_some());
    assert!(response.jobs.iter().all(|j| j.source_provider == "sample"));
}

#[tokio::test]
async fn live_results_filtered_to_empty_yield_fallback_source() {
    let server = MockServer::start().await;
    mount_jobs(
        &server,
        serde_json::json!([{
            "id": 3,
            "title": "Office Manager",
            "company_name": "DeskCo",
            "candidate_required_location": "Onsite, Tokyo"
        }]),
    )
    .await;

    let aggregator = JobAggregator::with_providers(
        &test_config(ProviderStrategy::ParallelMerge),
        vec![provider("Remotive.io", &server)],
    )
    .expect("aggregator");

    let response = aggregator
        .search_jobs(&JobQuery::new("engineer", Some("usa"), 20))
        .await;

    assert_eq!(response.source, "fallback");
    assert!(!response.jobs.is_empty());
}

#[tokio::test]
async fn limit_is_clamped_and_enforced() {
    let server = MockServer::start().await;
    mount_jobs(
        &server,
        serde_json::json!([
            {"id": 1, "title": "A", "candidate_required_location": "Remote"},
            {"id": 2, "title": "B", "candidate_required_location": "Remote"},
            {"id": 3, "title": "C", "candidate_required_location": "Remote"}
        ]),
    )
    .await;

    let aggregator = JobAggregator::with_providers(
        &test_config(ProviderStrategy::ParallelMerge),
        vec![provider("Remotive.io", &server)],
    )
    .expect("aggregator");

    let response = aggregator.search_jobs(&JobQuery::new("a", None, 2)).await;
    assert_eq!(response.jobs.len(), 2);

    // limit 0 clamps to 1
    let response = aggregator.search_jobs(&JobQuery::new("a", None, 0)).await;
    assert_eq!(response.jobs.len(), 1);
}

#[tokio::test]
async fn repeated_query_within_ttl_is_served_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/remote-jobs"))
        .and(query_param("search", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remotive_body(
            serde_json::json!([{
                "id": 1,
                "title": "Rust Engineer",
                "candidate_required_location": "Remote"
            }]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let aggregator = JobAggregator::with_providers(
        &test_config(ProviderStrategy::ParallelMerge),
        vec![provider("Remotive.io", &server)],
    )
    .expect("aggregator");

    let first = aggregator.search_jobs(&JobQuery::new("rust", None, 20)).await;
    let second = aggregator.search_jobs(&JobQuery::new("rust", None, 20)).await;

    assert_eq!(first.jobs.len(), 1);
    assert_eq!(second.jobs.len(), 1);
    // wiremock verifies the expect(1) on drop: the second call hit the cache.
}

#[tokio::test]
async fn outbound_gate_serves_cached_source() {
    let server = MockServer::start().await;
    mount_jobs(
        &server,
        serde_json::json!([{
            "id": 1,
            "title": "Rust Engineer",
            "candidate_required_location": "Remote"
        }]),
    )
    .await;

    let mut config = test_config(ProviderStrategy::ParallelMerge);
    config.min_request_interval_secs = 60;

    let aggregator = JobAggregator::with_providers(
        &config,
        vec![provider("Remotive.io", &server)],
    )
    .expect("aggregator");

    let first = aggregator.search_jobs(&JobQuery::new("rust", None, 20)).await;
    assert_eq!(first.source, "Remotive.io");

    // A different query would need a fresh outbound call, which the gate
    // refuses: the last successful payload is served instead.
    let second = aggregator.search_jobs(&JobQuery::new("python", None, 20)).await;
    assert_eq!(second.source, "cached");
    assert!(second.message.is_some());
    assert!(!second.jobs.is_empty());
}

#[tokio::test]
async fn search_jobs_never_exceeds_limit() {
    let broken = MockServer::start().await;
    mount_failure(&broken, 500).await;

    let aggregator = JobAggregator::with_providers(
        &test_config(ProviderStrategy::ParallelMerge),
        vec![provider("Remotive.io", &broken)],
    )
    .expect("aggregator");

    for limit in [1u32, 3, 50] {
        let response = aggregator
            .search_jobs(&JobQuery::new("engineer", None, limit))
            .await;
        assert!(
            response.jobs.len() <= limit as usize,
            "limit {limit} exceeded: {}",
            response.jobs.len()
        );
    }
}
