use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Aggregation, Filter, HistogramInterval, Pagination, SearchRequest};
use crate::constants::{aggregations, fields, formats, intervals, status};
use crate::error::Result;
use crate::models::{TenantScope, TimeRange};

/// The analytics question a request answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    /// Failed executions per minute
    FailedExecutions,
    /// Per-workflow activity and failure counts
    Integrations,
    /// Tenant-wide distinct total and failed executions
    ExecutionTotals,
    /// Distinct total and failed executions per day
    DailyMetrics,
}

impl QueryIntent {
    pub const ALL: [QueryIntent; 4] = [
        QueryIntent::FailedExecutions,
        QueryIntent::Integrations,
        QueryIntent::ExecutionTotals,
        QueryIntent::DailyMetrics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryIntent::FailedExecutions => "failed_executions",
            QueryIntent::Integrations => "integrations",
            QueryIntent::ExecutionTotals => "execution_totals",
            QueryIntent::DailyMetrics => "daily_metrics",
        }
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryIntent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        QueryIntent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = QueryIntent::ALL.iter().map(QueryIntent::as_str).collect();
                format!("unknown intent '{s}', expected one of: {}", known.join(", "))
            })
    }
}

/// Request constructors, one per [`QueryIntent`]
///
/// Every request shares the tenant/time filters of [`AnalyticsQueries::base`]
/// and asks for aggregations only.
pub struct AnalyticsQueries;

impl AnalyticsQueries {
    /// Dispatch on intent
    pub fn build(intent: QueryIntent, scope: &TenantScope, range: &TimeRange) -> Result<SearchRequest> {
        match intent {
            QueryIntent::FailedExecutions => Self::failed_executions(scope, range),
            QueryIntent::Integrations => Self::integrations(scope, range),
            QueryIntent::ExecutionTotals => Self::execution_totals(scope, range),
            QueryIntent::DailyMetrics => Self::daily_metrics(scope, range),
        }
    }

    /// Owner, external flag and inclusive timestamp range
    pub fn base(scope: &TenantScope, range: &TimeRange) -> Result<SearchRequest> {
        scope.validate()?;
        range.validate()?;

        Ok(SearchRequest::new()
            .paginate(Pagination::aggregations_only())
            .filter(Filter::match_phrase(fields::OWNER_ID, scope.owner_id.as_str()))
            .filter(Filter::match_phrase(fields::IS_EXTERNAL, scope.include_external))
            .filter(Filter::range_inclusive(
                fields::EVENT_TIMESTAMP,
                &range.from_iso(),
                &range.to_iso(),
                formats::RANGE_FORMAT,
            )))
    }

    /// Failed executions bucketed by minute, with the dominant event, workflow
    /// and error code of each execution
    pub fn failed_executions(scope: &TenantScope, range: &TimeRange) -> Result<SearchRequest> {
        let per_execution = Aggregation::terms(fields::EXECUTION_ID)
            .sub_aggregation(aggregations::EVENT_ID, Aggregation::terms(fields::EVENT_ID))
            .sub_aggregation(aggregations::WORKFLOW_ID, Aggregation::terms(fields::WORKFLOW_ID))
            .sub_aggregation(aggregations::WORKFLOW_NAME, Aggregation::terms(fields::WORKFLOW_NAME))
            .sub_aggregation(aggregations::ERROR_CODE, Aggregation::terms(fields::ERROR_CODE));

        let by_minute = Aggregation::date_histogram(
            fields::EVENT_TIMESTAMP,
            HistogramInterval::Fixed(intervals::MINUTE.to_string()),
            formats::MINUTE_BUCKET_FORMAT,
        )
        .sub_aggregation(aggregations::FAILED_EXECUTIONS, per_execution);

        Ok(Self::base(scope, range)?
            .prepend_filter(Filter::match_phrase(fields::STATUS, status::ERROR))
            .aggregation(aggregations::BY_DATE, by_minute))
    }

    /// One bucket per workflow with name, last activity and distinct execution counts
    pub fn integrations(scope: &TenantScope, range: &TimeRange) -> Result<SearchRequest> {
        let failed = Aggregation::filter(Filter::term(fields::STATUS, status::ERROR)).sub_aggregation(
            aggregations::UNIQUE_EXECUTIONS,
            Aggregation::cardinality(fields::EXECUTION_ID),
        );

        let per_workflow = Aggregation::terms(fields::WORKFLOW_ID)
            .sub_aggregation(aggregations::WORKFLOW_NAME, Aggregation::terms(fields::WORKFLOW_NAME))
            .sub_aggregation(aggregations::LAST_EVENT_DATE, Aggregation::max(fields::EVENT_TIMESTAMP))
            .sub_aggregation(aggregations::FAILED_EXECUTIONS, failed)
            .sub_aggregation(
                aggregations::TOTAL_EXECUTIONS,
                Aggregation::cardinality(fields::EXECUTION_ID),
            );

        Ok(Self::base(scope, range)?.aggregation(aggregations::INTEGRATIONS, per_workflow))
    }

    /// Distinct total and failed executions across the whole window
    pub fn execution_totals(scope: &TenantScope, range: &TimeRange) -> Result<SearchRequest> {
        let (total, failed) = Self::execution_counts();
        Ok(Self::base(scope, range)?
            .aggregation(aggregations::TOTAL_EXECUTIONS, total)
            .aggregation(aggregations::FAILED_EXECUTIONS, failed))
    }

    /// Distinct total and failed executions per calendar day
    pub fn daily_metrics(scope: &TenantScope, range: &TimeRange) -> Result<SearchRequest> {
        let (total, failed) = Self::execution_counts();
        let by_day = Aggregation::date_histogram(
            fields::EVENT_TIMESTAMP,
            HistogramInterval::Calendar(intervals::DAY.to_string()),
            formats::DAY_BUCKET_FORMAT,
        )
        .sub_aggregation(aggregations::TOTAL_EXECUTIONS, total)
        .sub_aggregation(aggregations::FAILED_EXECUTIONS, failed);

        Ok(Self::base(scope, range)?.aggregation(aggregations::BY_DATE, by_day))
    }

    fn execution_counts() -> (Aggregation, Aggregation) {
        let total = Aggregation::cardinality(fields::EXECUTION_ID);
        let failed = Aggregation::filter(Filter::match_phrase(fields::STATUS, status::ERROR))
            .sub_aggregation(
                aggregations::FAILED_COUNT,
                Aggregation::cardinality(fields::EXECUTION_ID),
            );
        (total, failed)
    }
}
