use async_trait::async_trait;
use serde_json::Value;

use super::SearchClientError;
use crate::query_builder::SearchRequest;

/// Executes search requests against an OpenSearch-compatible engine
///
/// Implementations own transport concerns: endpoint, request signing,
/// connection pooling, timeouts and cancellation.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Send `request` to `index` and return the decoded response body
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The full response, including the `aggregations` object
    /// * `Err` - Transport, status or decode failure
    async fn execute(&self, index: &str, request: &SearchRequest) -> Result<Value, SearchClientError>;

    /// Name used in log output
    fn client_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
