use serde_json::{json, Map, Value};

use super::Filter;

/// Bucket width of a date histogram
///
/// `Fixed` renders as the legacy `interval` key, `Calendar` as
/// `calendar_interval`; the engine accepts both for `minute` and `day`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistogramInterval {
    Fixed(String),
    Calendar(String),
}

impl HistogramInterval {
    fn key(&self) -> &'static str {
        match self {
            HistogramInterval::Fixed(_) => "interval",
            HistogramInterval::Calendar(_) => "calendar_interval",
        }
    }

    fn value(&self) -> &str {
        match self {
            HistogramInterval::Fixed(value) | HistogramInterval::Calendar(value) => value,
        }
    }
}

/// Aggregation types used by the analytics queries
#[derive(Debug, Clone, PartialEq)]
pub enum AggregationKind {
    Terms {
        field: String,
    },
    DateHistogram {
        field: String,
        interval: HistogramInterval,
        format: Option<String>,
    },
    Max {
        field: String,
    },
    Cardinality {
        field: String,
    },
    Filter {
        filter: Filter,
    },
}

impl AggregationKind {
    fn to_json(&self) -> (&'static str, Value) {
        match self {
            AggregationKind::Terms { field } => ("terms", json!({ "field": field })),
            AggregationKind::DateHistogram {
                field,
                interval,
                format,
            } => {
                let mut body = Map::new();
                body.insert("field".to_string(), Value::String(field.clone()));
                body.insert(
                    interval.key().to_string(),
                    Value::String(interval.value().to_string()),
                );
                if let Some(format) = format {
                    body.insert("format".to_string(), Value::String(format.clone()));
                }
                ("date_histogram", Value::Object(body))
            }
            AggregationKind::Max { field } => ("max", json!({ "field": field })),
            AggregationKind::Cardinality { field } => ("cardinality", json!({ "field": field })),
            AggregationKind::Filter { filter } => ("filter", filter.to_json()),
        }
    }
}

/// A named tree of aggregations
///
/// Sub-aggregations keep insertion order; adding a name twice replaces the
/// earlier definition in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub kind: AggregationKind,
    sub_aggregations: Vec<(String, Aggregation)>,
}

impl Aggregation {
    pub fn new(kind: AggregationKind) -> Self {
        Self {
            kind,
            sub_aggregations: Vec::new(),
        }
    }

    pub fn terms(field: &str) -> Self {
        Self::new(AggregationKind::Terms {
            field: field.to_string(),
        })
    }

    pub fn date_histogram(field: &str, interval: HistogramInterval, format: &str) -> Self {
        Self::new(AggregationKind::DateHistogram {
            field: field.to_string(),
            interval,
            format: Some(format.to_string()),
        })
    }

    pub fn max(field: &str) -> Self {
        Self::new(AggregationKind::Max {
            field: field.to_string(),
        })
    }

    pub fn cardinality(field: &str) -> Self {
        Self::new(AggregationKind::Cardinality {
            field: field.to_string(),
        })
    }

    pub fn filter(filter: Filter) -> Self {
        Self::new(AggregationKind::Filter { filter })
    }

    /// Add a named sub-aggregation
    pub fn sub_aggregation(mut self, name: &str, aggregation: Aggregation) -> Self {
        upsert(&mut self.sub_aggregations, name, aggregation);
        self
    }

    pub fn sub_aggregations(&self) -> &[(String, Aggregation)] {
        &self.sub_aggregations
    }

    pub fn find(&self, name: &str) -> Option<&Aggregation> {
        find(&self.sub_aggregations, name)
    }

    /// Convert to query DSL, e.g. `{"terms": {...}, "aggs": {...}}`
    pub fn to_json(&self) -> Value {
        let (kind, body) = self.kind.to_json();
        let mut map = Map::new();
        map.insert(kind.to_string(), body);
        if !self.sub_aggregations.is_empty() {
            map.insert("aggs".to_string(), named_to_json(&self.sub_aggregations));
        }
        Value::Object(map)
    }
}

pub(crate) fn upsert(entries: &mut Vec<(String, Aggregation)>, name: &str, aggregation: Aggregation) {
    match entries.iter_mut().find(|(existing, _)| existing == name) {
        Some((_, slot)) => *slot = aggregation,
        None => entries.push((name.to_string(), aggregation)),
    }
}

pub(crate) fn find<'a>(entries: &'a [(String, Aggregation)], name: &str) -> Option<&'a Aggregation> {
    entries
        .iter()
        .find(|(existing, _)| existing == name)
        .map(|(_, aggregation)| aggregation)
}

pub(crate) fn named_to_json(entries: &[(String, Aggregation)]) -> Value {
    let mut map = Map::new();
    for (name, aggregation) in entries {
        map.insert(name.clone(), aggregation.to_json());
    }
    Value::Object(map)
}
