use serde_json::Value;

use super::response::ResponseNode;
use crate::constants::{aggregations, formats};
use crate::error::Result;
use crate::models::{FailedExecutionBucket, FailedExecutionRecord};

/// Lazy view over the minute buckets of a failed-executions response
///
/// Borrowing the response keeps projection allocation-free until iterated;
/// [`FailedExecutionProjection::iter`] may be called any number of times.
#[derive(Debug, Clone)]
pub struct FailedExecutionProjection<'a> {
    by_date: ResponseNode<'a>,
    buckets: &'a [Value],
}

/// Validate the envelope of a failed-executions response and return its buckets
pub fn project_failed_executions(response: &Value) -> Result<FailedExecutionProjection<'_>> {
    let by_date = ResponseNode::aggregations(response)?.child(aggregations::BY_DATE)?;
    let buckets = by_date.buckets()?;
    Ok(FailedExecutionProjection { by_date, buckets })
}

impl<'a> FailedExecutionProjection<'a> {
    pub fn iter(&self) -> impl Iterator<Item = Result<FailedExecutionBucket>> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .map(move |(index, bucket)| project_minute(&self.by_date.bucket_at(index, bucket)))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Collect every bucket, failing on the first malformed one
    pub fn to_vec(&self) -> Result<Vec<FailedExecutionBucket>> {
        self.iter().collect()
    }
}

fn project_minute(bucket: &ResponseNode<'_>) -> Result<FailedExecutionBucket> {
    let bucket_start = bucket.histogram_key(formats::MINUTE_BUCKET_PARSE)?;
    let failed = bucket.child(aggregations::FAILED_EXECUTIONS)?;

    let executions = failed
        .buckets()?
        .iter()
        .enumerate()
        .map(|(index, execution)| project_execution(&failed.bucket_at(index, execution)))
        .collect::<Result<Vec<_>>>()?;

    Ok(FailedExecutionBucket {
        bucket_start,
        executions,
    })
}

fn project_execution(execution: &ResponseNode<'_>) -> Result<FailedExecutionRecord> {
    Ok(FailedExecutionRecord {
        execution_id: execution.key_string()?,
        event_id: execution.first_term(aggregations::EVENT_ID)?,
        workflow_id: execution.first_term(aggregations::WORKFLOW_ID)?,
        workflow_name: execution.first_term(aggregations::WORKFLOW_NAME)?,
        error_code: execution.first_term(aggregations::ERROR_CODE)?,
    })
}
