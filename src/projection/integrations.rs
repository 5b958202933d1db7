use serde_json::Value;
use tracing::warn;

use super::response::ResponseNode;
use crate::constants::aggregations;
use crate::error::{AnalyticsError, Result};
use crate::models::IntegrationSummary;

/// One [`IntegrationSummary`] per workflow bucket, in engine order
pub fn project_integrations(response: &Value) -> Result<Vec<IntegrationSummary>> {
    let integrations = ResponseNode::aggregations(response)?.child(aggregations::INTEGRATIONS)?;

    integrations
        .buckets()?
        .iter()
        .enumerate()
        .map(|(index, bucket)| project_workflow(&integrations.bucket_at(index, bucket)))
        .collect()
}

fn project_workflow(bucket: &ResponseNode<'_>) -> Result<IntegrationSummary> {
    let workflow_id = bucket.key_string()?;
    let workflow_name = bucket.first_term(aggregations::WORKFLOW_NAME)?;

    let last_event = bucket.child(aggregations::LAST_EVENT_DATE)?;
    let last_event_at = last_event.metric_timestamp()?.ok_or_else(|| {
        AnalyticsError::malformed_response(
            last_event.path(),
            "max timestamp is null for a non-empty workflow bucket",
        )
    })?;

    let total_executions = bucket.child(aggregations::TOTAL_EXECUTIONS)?.metric_count()?;
    let failed_executions = bucket
        .child(aggregations::FAILED_EXECUTIONS)?
        .child(aggregations::UNIQUE_EXECUTIONS)?
        .metric_count()?;

    Ok(IntegrationSummary {
        failed_executions: clamp_failed(bucket.path(), total_executions, failed_executions),
        workflow_id,
        workflow_name,
        last_event_at,
        total_executions,
    })
}

/// Cardinality is approximate; keep `failed <= total`
pub(crate) fn clamp_failed(path: &str, total: u64, failed: u64) -> u64 {
    if failed > total {
        warn!(
            path = %path,
            total_executions = total,
            failed_executions = failed,
            "Approximate failed count exceeds total; clamping"
        );
        total
    } else {
        failed
    }
}
