#![allow(clippy::doc_markdown)] // Allow technical terms like OpenSearch, RFC 3339 in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Workflow Analytics
//!
//! Query construction and result projection for workflow execution analytics
//! over an OpenSearch event index.
//!
//! ## Overview
//!
//! Workflow executions emit one event per status change into a search index.
//! This crate answers dashboard questions about those events for one tenant
//! (owner) over a time window:
//!
//! - which executions failed, minute by minute, with their event, workflow and error code
//! - per-workflow last activity with distinct total and failed execution counts
//! - tenant-wide and per-day distinct execution totals
//!
//! ## Architecture
//!
//! ```text
//! TenantScope + TimeRange
//!        │
//!        ▼
//! query_builder ──► SearchRequest ──► SearchClient (caller-supplied) ──► serde_json::Value
//!                                                                           │
//!                                                                           ▼
//!                                                        projection ──► typed records
//! ```
//!
//! Builders and projectors are pure and synchronous. [`service::WorkflowAnalyticsService`]
//! wires them to a [`client::SearchClient`] with structured logging.
//!
//! ## Module Organization
//!
//! - [`query_builder`] - Request bodies for each [`QueryIntent`]
//! - [`projection`] - Aggregation responses to typed records
//! - [`models`] - Scope, time range and result records
//! - [`client`] - Search engine seam
//! - [`service`] - Async façade over builder, client and projector
//! - [`config`] - YAML configuration with environment overrides
//! - [`logging`] - Console logging setup and structured logging macros
//! - [`constants`] - Index field and aggregation names
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use workflow_analytics::models::{TenantScope, TimeRange};
//! use workflow_analytics::projection::project_failed_executions;
//! use workflow_analytics::query_builder::AnalyticsQueries;
//! use serde_json::json;
//!
//! # fn main() -> workflow_analytics::Result<()> {
//! let scope = TenantScope::internal("owner_id")?;
//! let range = TimeRange::parse("2024-01-16T08:19:24.908Z", "2024-06-20T08:19:24.908Z")?;
//!
//! let body = AnalyticsQueries::failed_executions(&scope, &range)?.to_json_string();
//! assert!(body.starts_with(r#"{"from":0,"size":0"#));
//!
//! let response = json!({"aggregations": {"by_date": {"buckets": []}}});
//! assert!(project_failed_executions(&response)?.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod projection;
pub mod query_builder;
pub mod service;
pub mod utils;

pub use client::{SearchClient, SearchClientError};
pub use config::{AnalyticsConfig, ConfigManager, ConfigurationError};
pub use error::{AnalyticsError, Result};
pub use models::{
    DailyExecutionMetric, ExecutionTotals, FailedExecutionBucket, FailedExecutionRecord,
    IntegrationSummary, TenantScope, TimeRange,
};
pub use projection::FailedExecutionProjection;
pub use query_builder::{AnalyticsQueries, QueryIntent, SearchRequest};
pub use service::WorkflowAnalyticsService;
