//! # Search Client Seam
//!
//! The analytics core never talks to the network itself. Callers supply an
//! implementation of [`SearchClient`] that sends a [`SearchRequest`] body to
//! an index and hands back the decoded JSON response.
//!
//! ## Usage
//!
//! ```rust
//! use workflow_analytics::client::{SearchClient, SearchClientError};
//! use workflow_analytics::query_builder::SearchRequest;
//! use serde_json::{json, Value};
//!
//! struct CannedClient;
//!
//! #[async_trait::async_trait]
//! impl SearchClient for CannedClient {
//!     async fn execute(&self, _index: &str, _request: &SearchRequest) -> Result<Value, SearchClientError> {
//!         Ok(json!({"aggregations": {"integrations": {"buckets": []}}}))
//!     }
//! }
//! ```
//!
//! [`SearchRequest`]: crate::query_builder::SearchRequest

pub mod error;
pub mod traits;

pub use error::SearchClientError;
pub use traits::SearchClient;
