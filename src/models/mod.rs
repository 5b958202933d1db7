//! # Analytics Data Model
//!
//! Request parameters ([`TenantScope`], [`TimeRange`]) and the typed records the
//! projectors build from engine responses. Records are plain values constructed
//! per request; nothing here is persisted.

pub mod execution_metrics;
pub mod failed_execution;
pub mod integration_summary;
pub mod tenant_scope;
pub mod time_range;

pub use execution_metrics::{DailyExecutionMetric, ExecutionTotals};
pub use failed_execution::{FailedExecutionBucket, FailedExecutionRecord};
pub use integration_summary::IntegrationSummary;
pub use tenant_scope::TenantScope;
pub use time_range::TimeRange;
