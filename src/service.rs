//! # Workflow Analytics Service
//!
//! Async façade combining the query builder, a [`SearchClient`] and the
//! result projectors. One call builds a request, sends it to the configured
//! index and projects the response into owned records.
//!
//! The service holds no mutable state; clones share the client and can be
//! used concurrently.

use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::client::SearchClient;
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, Result};
use crate::models::{
    DailyExecutionMetric, ExecutionTotals, FailedExecutionBucket, IntegrationSummary, TenantScope,
    TimeRange,
};
use crate::projection;
use crate::query_builder::{AnalyticsQueries, QueryIntent};

pub struct WorkflowAnalyticsService<C: SearchClient> {
    client: Arc<C>,
    config: AnalyticsConfig,
}

impl<C: SearchClient> Clone for WorkflowAnalyticsService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            config: self.config.clone(),
        }
    }
}

impl<C: SearchClient> WorkflowAnalyticsService<C> {
    pub fn new(client: Arc<C>, config: AnalyticsConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// Failed executions per minute, in engine bucket order
    pub async fn failed_executions(
        &self,
        scope: &TenantScope,
        range: &TimeRange,
    ) -> Result<Vec<FailedExecutionBucket>> {
        let response = self.search(QueryIntent::FailedExecutions, scope, range).await?;
        projection::project_failed_executions(&response)?.to_vec()
    }

    /// Per-workflow activity and distinct execution counts
    pub async fn integrations(
        &self,
        scope: &TenantScope,
        range: &TimeRange,
    ) -> Result<Vec<IntegrationSummary>> {
        let response = self.search(QueryIntent::Integrations, scope, range).await?;
        projection::project_integrations(&response)
    }

    pub async fn execution_totals(
        &self,
        scope: &TenantScope,
        range: &TimeRange,
    ) -> Result<ExecutionTotals> {
        let response = self.search(QueryIntent::ExecutionTotals, scope, range).await?;
        projection::project_execution_totals(&response)
    }

    pub async fn daily_metrics(
        &self,
        scope: &TenantScope,
        range: &TimeRange,
    ) -> Result<Vec<DailyExecutionMetric>> {
        let response = self.search(QueryIntent::DailyMetrics, scope, range).await?;
        projection::project_daily_metrics(&response)
    }

    /// Build, log and execute; validation errors return before the client is touched
    async fn search(
        &self,
        intent: QueryIntent,
        scope: &TenantScope,
        range: &TimeRange,
    ) -> Result<Value> {
        let request = AnalyticsQueries::build(intent, scope, range)?;
        let correlation_id = Uuid::new_v4();
        let index = self.config.search.index.as_str();

        crate::log_search!(info, "REQUEST",
            correlation_id: correlation_id,
            intent: intent.as_str(),
            owner_id: scope.owner_id,
            include_external: scope.include_external,
            from: range.from_iso(),
            to: range.to_iso(),
            index: index
        );

        let started = Instant::now();
        let response = self
            .client
            .execute(index, &request)
            .await
            .map_err(|error| {
                crate::log_search!(error, "FAILED",
                    correlation_id: correlation_id,
                    intent: intent.as_str(),
                    owner_id: scope.owner_id,
                    client: self.client.client_name(),
                    error: error.to_string()
                );
                AnalyticsError::Search(error)
            })?;

        crate::log_search!(debug, "COMPLETED",
            correlation_id: correlation_id,
            intent: intent.as_str(),
            elapsed_ms: started.elapsed().as_millis()
        );

        Ok(response)
    }
}
