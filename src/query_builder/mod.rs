//! # Query Builder System
//!
//! Search request construction for workflow execution analytics.
//!
//! ## Overview
//!
//! Requests are plain values built with a fluent API and rendered to the
//! engine's JSON query DSL. Building is pure: no I/O, no shared state, and the
//! same inputs always render to byte-identical JSON.
//!
//! ## Key Components
//!
//! - [`builder`] - [`SearchRequest`] with bool-filter query, hit window and aggregation tree
//! - [`conditions`] - Filter clauses (`match_phrase`, `term`, `range`)
//! - [`aggregations`] - Terms, date histogram, max, cardinality and filter aggregations
//! - [`pagination`] - `from`/`size` hit window
//! - [`intents`] - One request constructor per analytics question
//!
//! ## Intents
//!
//! - `failed_executions()` - Failed executions per minute with event, workflow and error code
//! - `integrations()` - Per-workflow last activity and distinct execution counts
//! - `execution_totals()` - Tenant-wide distinct total and failed executions
//! - `daily_metrics()` - Distinct total and failed executions per day
//!
//! ## Example Usage
//!
//! ```rust
//! use workflow_analytics::models::{TenantScope, TimeRange};
//! use workflow_analytics::query_builder::AnalyticsQueries;
//!
//! # fn main() -> workflow_analytics::Result<()> {
//! let scope = TenantScope::internal("owner_id")?;
//! let range = TimeRange::parse("2024-05-20T08:19:24.908Z", "2024-06-20T08:19:24.908Z")?;
//!
//! let request = AnalyticsQueries::integrations(&scope, &range)?;
//! assert_eq!(request.to_json()["size"], 0);
//! # Ok(())
//! # }
//! ```

pub mod aggregations;
pub mod builder;
pub mod conditions;
pub mod intents;
pub mod pagination;

pub use aggregations::{Aggregation, AggregationKind, HistogramInterval};
pub use builder::SearchRequest;
pub use conditions::Filter;
pub use intents::{AnalyticsQueries, QueryIntent};
pub use pagination::Pagination;
