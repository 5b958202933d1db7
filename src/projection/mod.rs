//! # Result Projection
//!
//! Turns raw aggregation responses into typed analytics records.
//!
//! Projection is pure and synchronous. Structural problems in the response
//! (a missing aggregation key, a non-array `buckets`) surface as
//! [`crate::AnalyticsError::MalformedResponse`] carrying the offending path;
//! empty bucket lists are valid data and project to empty results.

pub mod execution_metrics;
pub mod failed_executions;
pub mod integrations;
pub mod response;

pub use execution_metrics::{project_daily_metrics, project_execution_totals};
pub use failed_executions::{project_failed_executions, FailedExecutionProjection};
pub use integrations::project_integrations;
pub use response::ResponseNode;
