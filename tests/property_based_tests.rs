mod common;

use common::strategies::*;
use proptest::prelude::*;
use serde_json::json;
use workflow_analytics::models::{TenantScope, TimeRange};
use workflow_analytics::projection::{project_execution_totals, project_integrations};
use workflow_analytics::query_builder::{AnalyticsQueries, QueryIntent};
use workflow_analytics::AnalyticsError;

fn intent_strategy() -> impl Strategy<Value = QueryIntent> {
    prop::sample::select(QueryIntent::ALL.to_vec())
}

proptest! {
    /// Property: equal inputs always render byte-identical bodies
    #[test]
    fn building_is_deterministic(
        intent in intent_strategy(),
        owner_id in owner_id_strategy(),
        include_external in any::<bool>(),
        (from, to) in ordered_window_strategy(),
    ) {
        let scope = TenantScope::new(owner_id, include_external).unwrap();
        let range = TimeRange::new(from, to).unwrap();

        let first = AnalyticsQueries::build(intent, &scope, &range).unwrap().to_json_string();
        let second = AnalyticsQueries::build(intent, &scope, &range).unwrap().to_json_string();
        prop_assert_eq!(first, second);
    }

    /// Property: a reversed window is always rejected before anything is built
    #[test]
    fn reversed_windows_are_invalid(
        intent in intent_strategy(),
        owner_id in owner_id_strategy(),
        (from, to) in reversed_window_strategy(),
    ) {
        let scope = TenantScope::internal(owner_id).unwrap();
        let range = TimeRange { from, to };

        let result = AnalyticsQueries::build(intent, &scope, &range);
        let is_invalid_range = matches!(result, Err(AnalyticsError::InvalidRange { .. }));
        prop_assert!(is_invalid_range, "expected InvalidRange, got {:?}", result);
    }

    /// Property: blank owner ids are always rejected
    #[test]
    fn blank_owner_ids_are_invalid(
        intent in intent_strategy(),
        owner_id in blank_owner_id_strategy(),
        (from, to) in ordered_window_strategy(),
    ) {
        let scope = TenantScope { owner_id, include_external: false };
        let range = TimeRange::new(from, to).unwrap();

        let result = AnalyticsQueries::build(intent, &scope, &range);
        let is_invalid_scope = matches!(result, Err(AnalyticsError::InvalidScope { .. }));
        prop_assert!(is_invalid_scope, "expected InvalidScope, got {:?}", result);
    }

    /// Property: the range filter carries both bounds at millisecond precision
    #[test]
    fn range_filter_carries_bounds(
        owner_id in owner_id_strategy(),
        (from, to) in ordered_window_strategy(),
    ) {
        let scope = TenantScope::internal(owner_id).unwrap();
        let range = TimeRange::new(from, to).unwrap();
        let body = AnalyticsQueries::integrations(&scope, &range).unwrap().to_json();

        let bounds = &body["query"]["bool"]["filter"][2]["range"]["event_timestamp"];
        prop_assert_eq!(&bounds["gte"], &json!(range.from_iso()));
        prop_assert_eq!(&bounds["lte"], &json!(range.to_iso()));
        prop_assert_eq!(TimeRange::parse(&range.from_iso(), &range.to_iso()).unwrap(), range);
    }

    /// Property: projected failed counts never exceed totals
    #[test]
    fn projected_failed_never_exceeds_total((total, failed) in cardinality_pair_strategy()) {
        let totals = project_execution_totals(&json!({"aggregations": {
            "total_executions": {"value": total},
            "failed_executions": {"doc_count": failed, "failed_count": {"value": failed}}
        }})).unwrap();
        prop_assert!(totals.failed_executions <= totals.total_executions);
        prop_assert_eq!(totals.failed_executions, failed.min(total));

        let summaries = project_integrations(&json!({"aggregations": {"integrations": {"buckets": [{
            "key": "wf-1",
            "workflow_name": {"buckets": []},
            "last_event_date": {"value": 1718871564908_i64},
            "failed_executions": {"unique_executions": {"value": failed}},
            "total_executions": {"value": total}
        }]}}})).unwrap();
        prop_assert!(summaries[0].failed_executions <= summaries[0].total_executions);
    }
}
