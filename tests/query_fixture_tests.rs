//! Request bodies must match the recorded OpenSearch fixtures exactly,
//! including key order.

mod common;

use common::*;
use workflow_analytics::models::TenantScope;
use workflow_analytics::query_builder::{AnalyticsQueries, QueryIntent};

#[test]
fn test_failed_executions_query_matches_fixture() {
    let expected = load_fixture("get_workflow_failed_executions_query.json");
    let request =
        AnalyticsQueries::failed_executions(&fixture_scope(), &failed_executions_range()).unwrap();

    assert_eq!(request.to_json(), expected);
    assert_eq!(request.to_json_string(), expected.to_string());
}

#[test]
fn test_integrations_query_matches_fixture() {
    let expected = load_fixture("get_workflow_integrations_query.json");
    let request = AnalyticsQueries::integrations(&fixture_scope(), &integrations_range()).unwrap();

    assert_eq!(request.to_json(), expected);
    assert_eq!(request.to_json_string(), expected.to_string());
}

#[test]
fn test_building_twice_is_byte_identical() {
    for intent in QueryIntent::ALL {
        let first = AnalyticsQueries::build(intent, &fixture_scope(), &integrations_range())
            .unwrap()
            .to_json_string();
        let second = AnalyticsQueries::build(intent, &fixture_scope(), &integrations_range())
            .unwrap()
            .to_json_string();
        assert_eq!(first, second, "{intent}");
    }
}

#[test]
fn test_external_scope_differs_only_in_flag() {
    let internal = AnalyticsQueries::integrations(&fixture_scope(), &integrations_range())
        .unwrap()
        .to_json();
    let external = AnalyticsQueries::integrations(
        &TenantScope::new("owner_id", true).unwrap(),
        &integrations_range(),
    )
    .unwrap()
    .to_json();

    let mut patched = internal.clone();
    patched["query"]["bool"]["filter"][1]["match_phrase"]["is_external"] = serde_json::json!(true);
    assert_ne!(internal, external);
    assert_eq!(patched, external);
}

#[test]
fn test_only_failed_executions_filters_on_status() {
    for intent in QueryIntent::ALL {
        let body = AnalyticsQueries::build(intent, &fixture_scope(), &integrations_range())
            .unwrap()
            .to_json();
        let first_filter = &body["query"]["bool"]["filter"][0]["match_phrase"];
        let has_status = first_filter.get("status").is_some();
        assert_eq!(has_status, intent == QueryIntent::FailedExecutions, "{intent}");
    }
}
