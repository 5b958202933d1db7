use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

use super::aggregations::{find, named_to_json, upsert};
use super::{Aggregation, Filter, Pagination};

/// Search request body: a bool filter query plus an aggregation tree
///
/// Rendering is deterministic; filters and aggregations appear in the order
/// they were added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchRequest {
    pagination: Pagination,
    filters: Vec<Filter>,
    aggregations: Vec<(String, Aggregation)>,
}

impl SearchRequest {
    /// Create an aggregations-only request with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter clause
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Insert a filter clause ahead of all existing ones
    pub fn prepend_filter(mut self, filter: Filter) -> Self {
        self.filters.insert(0, filter);
        self
    }

    /// Add a named top-level aggregation
    pub fn aggregation(mut self, name: &str, aggregation: Aggregation) -> Self {
        upsert(&mut self.aggregations, name, aggregation);
        self
    }

    /// Set the `from`/`size` hit window
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn aggregations(&self) -> &[(String, Aggregation)] {
        &self.aggregations
    }

    pub fn find_aggregation(&self, name: &str) -> Option<&Aggregation> {
        find(&self.aggregations, name)
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Build the complete request body
    pub fn to_json(&self) -> Value {
        let filters: Vec<Value> = self.filters.iter().map(Filter::to_json).collect();

        let mut body = Map::new();
        body.insert("from".to_string(), json!(self.pagination.from));
        body.insert("size".to_string(), json!(self.pagination.size));
        body.insert("query".to_string(), json!({ "bool": { "filter": filters } }));
        if !self.aggregations.is_empty() {
            body.insert("aggs".to_string(), named_to_json(&self.aggregations));
        }
        Value::Object(body)
    }

    /// Compact JSON body as sent over the wire
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl Serialize for SearchRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
