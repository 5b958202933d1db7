mod common;

use common::*;
use std::sync::Arc;
use workflow_analytics::client::SearchClientError;
use workflow_analytics::models::{TenantScope, TimeRange};
use workflow_analytics::{AnalyticsConfig, AnalyticsError, WorkflowAnalyticsService};

fn service(client: Arc<MockSearchClient>) -> WorkflowAnalyticsService<MockSearchClient> {
    WorkflowAnalyticsService::new(client, AnalyticsConfig::default())
}

#[tokio::test]
async fn test_failed_executions_end_to_end() {
    let client = Arc::new(MockSearchClient::always(load_fixture(
        "get_workflow_failed_executions_response.json",
    )));
    let service = service(client.clone());

    let buckets = service
        .failed_executions(&fixture_scope(), &failed_executions_range())
        .await
        .unwrap();
    assert_eq!(buckets.len(), 3);

    let recorded = client.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].index, "workflow-execution-events");
    assert_eq!(
        recorded[0].body,
        load_fixture("get_workflow_failed_executions_query.json")
    );
}

#[tokio::test]
async fn test_integrations_end_to_end() {
    let client = Arc::new(MockSearchClient::always(load_fixture(
        "get_workflow_integrations_response.json",
    )));
    let service = service(client.clone());

    let summaries = service
        .integrations(&fixture_scope(), &integrations_range())
        .await
        .unwrap();
    assert_eq!(summaries.len(), 3);
    assert_eq!(
        client.recorded()[0].body,
        load_fixture("get_workflow_integrations_query.json")
    );
}

#[tokio::test]
async fn test_execution_totals_and_daily_metrics() {
    let client = Arc::new(MockSearchClient::new());
    client
        .enqueue(Ok(load_fixture("get_executions_metrics_response.json")))
        .enqueue(Ok(load_fixture("get_execution_metrics_by_date_response.json")));
    let service = service(client.clone());

    let totals = service
        .execution_totals(&fixture_scope(), &integrations_range())
        .await
        .unwrap();
    assert_eq!(totals.total_executions, 126);

    let daily = service
        .daily_metrics(&fixture_scope(), &integrations_range())
        .await
        .unwrap();
    assert_eq!(daily.len(), 3);
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn test_client_failures_surface_as_search_errors() {
    let client = Arc::new(MockSearchClient::failing(SearchClientError::transport(
        "connection reset by peer",
    )));
    let service = service(client);

    let err = service
        .integrations(&fixture_scope(), &integrations_range())
        .await
        .unwrap_err();
    match err {
        AnalyticsError::Search(SearchClientError::Transport(message)) => {
            assert_eq!(message, "connection reset by peer")
        }
        other => panic!("expected Search error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_errors_never_reach_the_client() {
    let client = Arc::new(MockSearchClient::always(load_fixture("empty_buckets_response.json")));
    let service = service(client.clone());

    let reversed = TimeRange {
        from: integrations_range().to,
        to: integrations_range().from,
    };
    let err = service
        .failed_executions(&fixture_scope(), &reversed)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidRange { .. }));

    let blank = TenantScope {
        owner_id: "   ".to_string(),
        include_external: false,
    };
    let err = service
        .daily_metrics(&blank, &integrations_range())
        .await
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidScope { .. }));

    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_response_is_reported() {
    let client = Arc::new(MockSearchClient::always(load_fixture(
        "missing_aggregations_response.json",
    )));
    let service = service(client);

    let err = service
        .execution_totals(&fixture_scope(), &integrations_range())
        .await
        .unwrap_err();
    assert!(err.is_malformed_response());
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let client = Arc::new(MockSearchClient::always(load_fixture("empty_buckets_response.json")));
    let service = service(client.clone());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .integrations(&fixture_scope(), &integrations_range())
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_empty());
    }
    assert_eq!(client.call_count(), 8);
}
