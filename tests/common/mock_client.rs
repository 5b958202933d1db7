use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use workflow_analytics::client::{SearchClient, SearchClientError};
use workflow_analytics::query_builder::SearchRequest;

/// A request as the mock client received it
#[derive(Debug, Clone)]
pub struct RecordedSearch {
    pub index: String,
    pub body: Value,
}

/// In-memory [`SearchClient`] returning queued responses in order
///
/// When the queue is empty every further call returns the fallback
/// response, if one is set, or a transport error.
#[derive(Debug, Default)]
pub struct MockSearchClient {
    responses: Mutex<VecDeque<Result<Value, SearchClientError>>>,
    fallback: Option<Result<Value, SearchClientError>>,
    recorded: Mutex<Vec<RecordedSearch>>,
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call with `response`
    pub fn always(response: Value) -> Self {
        Self {
            fallback: Some(Ok(response)),
            ..Self::default()
        }
    }

    /// Fail every call with `error`
    pub fn failing(error: SearchClientError) -> Self {
        Self {
            fallback: Some(Err(error)),
            ..Self::default()
        }
    }

    pub fn enqueue(&self, response: Result<Value, SearchClientError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn recorded(&self) -> Vec<RecordedSearch> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchClient for MockSearchClient {
    async fn execute(&self, index: &str, request: &SearchRequest) -> Result<Value, SearchClientError> {
        self.recorded.lock().unwrap().push(RecordedSearch {
            index: index.to_string(),
            body: request.to_json(),
        });

        if let Some(queued) = self.responses.lock().unwrap().pop_front() {
            return queued;
        }

        self.fallback
            .clone()
            .unwrap_or_else(|| Err(SearchClientError::transport("no response queued")))
    }

    fn client_name(&self) -> &'static str {
        "mock"
    }
}
