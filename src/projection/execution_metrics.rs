use serde_json::Value;

use super::integrations::clamp_failed;
use super::response::ResponseNode;
use crate::constants::{aggregations, formats, response};
use crate::error::{AnalyticsError, Result};
use crate::models::{DailyExecutionMetric, ExecutionTotals};

/// Tenant-wide distinct total and failed executions
pub fn project_execution_totals(search_response: &Value) -> Result<ExecutionTotals> {
    let aggs = ResponseNode::aggregations(search_response)?;
    let (total_executions, failed_executions) = execution_counts(&aggs)?;
    Ok(ExecutionTotals {
        total_executions,
        failed_executions,
    })
}

/// One [`DailyExecutionMetric`] per calendar-day bucket, in engine order
pub fn project_daily_metrics(search_response: &Value) -> Result<Vec<DailyExecutionMetric>> {
    let by_date = ResponseNode::aggregations(search_response)?.child(aggregations::BY_DATE)?;

    by_date
        .buckets()?
        .iter()
        .enumerate()
        .map(|(index, bucket)| {
            let day = by_date.bucket_at(index, bucket);
            let (total_executions, failed_executions) = execution_counts(&day)?;
            Ok(DailyExecutionMetric {
                date: bucket_date(&day)?,
                total_executions,
                failed_executions,
            })
        })
        .collect()
}

fn execution_counts(node: &ResponseNode<'_>) -> Result<(u64, u64)> {
    let total = node.child(aggregations::TOTAL_EXECUTIONS)?.metric_count()?;
    let failed = node
        .child(aggregations::FAILED_EXECUTIONS)?
        .child(aggregations::FAILED_COUNT)?
        .metric_count()?;
    Ok((total, clamp_failed(node.path(), total, failed)))
}

// key_as_string is the calendar day itself; the numeric key is its UTC midnight
fn bucket_date(day: &ResponseNode<'_>) -> Result<chrono::NaiveDate> {
    if let Some(Value::String(raw)) = day.value().get(response::KEY_AS_STRING) {
        return chrono::NaiveDate::parse_from_str(raw, formats::DAY_BUCKET_PARSE).map_err(|e| {
            AnalyticsError::malformed_response(
                format!("{}.{}", day.path(), response::KEY_AS_STRING),
                format!("'{raw}' is not a calendar day: {e}"),
            )
        });
    }
    Ok(day.histogram_key(formats::DAY_BUCKET_PARSE)?.date_naive())
}
