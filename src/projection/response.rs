//! Path-aware navigation over raw engine responses.
//!
//! Every accessor distinguishes a structural mismatch (key absent, wrong JSON
//! type), which is a [`AnalyticsError::MalformedResponse`], from legitimately
//! empty data (zero buckets, null metric), which is not an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::constants::response;
use crate::error::{AnalyticsError, Result};

/// A JSON node together with the dotted path it was reached by
#[derive(Debug, Clone)]
pub struct ResponseNode<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> ResponseNode<'a> {
    /// The `aggregations` object of a search response
    pub fn aggregations(search_response: &'a Value) -> Result<Self> {
        let root = Self {
            value: search_response,
            path: String::new(),
        };
        root.child(response::AGGREGATIONS)
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn join(&self, segment: &str) -> String {
        if self.path.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", self.path, segment)
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> AnalyticsError {
        AnalyticsError::malformed_response(self.path.clone(), reason)
    }

    /// Named member of an object node
    pub fn child(&self, key: &str) -> Result<ResponseNode<'a>> {
        let object = self.value.as_object().ok_or_else(|| {
            AnalyticsError::malformed_response(
                self.join(key),
                format!("parent is {} rather than an object", json_type(self.value)),
            )
        })?;

        match object.get(key) {
            Some(value) => Ok(ResponseNode {
                value,
                path: self.join(key),
            }),
            None => Err(AnalyticsError::malformed_response(
                self.join(key),
                "aggregation key is missing",
            )),
        }
    }

    /// Raw `buckets` array of a bucket aggregation; may be empty
    pub fn buckets(&self) -> Result<&'a [Value]> {
        let buckets = self.child(response::BUCKETS)?;
        buckets
            .value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| buckets.malformed(format!("expected array, found {}", json_type(buckets.value))))
    }

    /// Node for the bucket at `index` of [`Self::buckets`]
    pub fn bucket_at(&self, index: usize, bucket: &'a Value) -> ResponseNode<'a> {
        ResponseNode {
            value: bucket,
            path: format!("{}[{}]", self.join(response::BUCKETS), index),
        }
    }

    /// Bucket key as a string; numeric keys are rendered in decimal
    pub fn key_string(&self) -> Result<String> {
        let key = self.child(response::KEY)?;
        match key.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(key.malformed(format!("expected scalar key, found {}", json_type(other)))),
        }
    }

    /// Key of the first (highest-count) bucket of the `name` terms sub-aggregation
    pub fn first_term(&self, name: &str) -> Result<Option<String>> {
        let terms = self.child(name)?;
        let buckets = terms.buckets()?;
        match buckets.first() {
            Some(first) => terms.bucket_at(0, first).key_string().map(Some),
            None => Ok(None),
        }
    }

    /// Integer `value` of a metric aggregation; a null value counts as zero
    pub fn metric_count(&self) -> Result<u64> {
        let value = self.child(response::VALUE)?;
        match value.value {
            Value::Null => Ok(0),
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
                .ok_or_else(|| value.malformed(format!("expected non-negative count, found {n}"))),
            other => Err(value.malformed(format!("expected number, found {}", json_type(other)))),
        }
    }

    /// Timestamp `value` of a max/min metric, `None` when the metric saw no documents
    ///
    /// Reads epoch millis from `value`, falling back to an RFC 3339 `value_as_string`.
    pub fn metric_timestamp(&self) -> Result<Option<DateTime<Utc>>> {
        let value = self.child(response::VALUE)?;
        match value.value {
            Value::Number(_) => epoch_millis(&value).map(Some),
            Value::Null => match self.value.get(response::VALUE_AS_STRING) {
                Some(Value::String(raw)) => {
                    let as_string = self.child(response::VALUE_AS_STRING)?;
                    parse_rfc3339(&as_string, raw).map(Some)
                }
                _ => Ok(None),
            },
            other => Err(value.malformed(format!("expected number, found {}", json_type(other)))),
        }
    }

    /// Start instant of a date histogram bucket
    ///
    /// Prefers the numeric `key`; falls back to `key_as_string` in
    /// `formats::MINUTE_BUCKET_PARSE` / `DAY_BUCKET_PARSE` layout (UTC).
    pub fn histogram_key(&self, fallback_format: &str) -> Result<DateTime<Utc>> {
        if let Some(Value::Number(_)) = self.value.get(response::KEY) {
            return epoch_millis(&self.child(response::KEY)?);
        }

        let as_string = self.child(response::KEY_AS_STRING)?;
        let raw = as_string
            .value
            .as_str()
            .ok_or_else(|| as_string.malformed("expected string"))?;

        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fallback_format) {
            return Ok(naive.and_utc());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, fallback_format) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(midnight.and_utc());
            }
        }
        Err(as_string.malformed(format!("'{raw}' does not match '{fallback_format}'")))
    }
}

fn epoch_millis(node: &ResponseNode<'_>) -> Result<DateTime<Utc>> {
    let millis = node
        .value
        .as_i64()
        .or_else(|| node.value.as_f64().map(|f| f.round() as i64))
        .ok_or_else(|| node.malformed("expected epoch milliseconds"))?;

    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| node.malformed(format!("{millis} is out of the representable range")))
}

fn parse_rfc3339(node: &ResponseNode<'_>, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| node.malformed(format!("'{raw}' is not ISO-8601: {e}")))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
