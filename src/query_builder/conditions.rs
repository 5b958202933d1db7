use serde_json::{json, Map, Value};

/// Represents the filter clauses placed under `query.bool.filter`
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `{"match_phrase": {field: value}}`
    MatchPhrase { field: String, value: Value },
    /// `{"term": {field: value}}`
    Term { field: String, value: Value },
    /// `{"range": {field: {"gte": .., "lte": .., "format": ..}}}`
    Range {
        field: String,
        gte: Option<String>,
        lte: Option<String>,
        format: Option<String>,
    },
}

impl Filter {
    pub fn match_phrase(field: &str, value: impl Into<Value>) -> Self {
        Filter::MatchPhrase {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn term(field: &str, value: impl Into<Value>) -> Self {
        Filter::Term {
            field: field.to_string(),
            value: value.into(),
        }
    }

    /// Inclusive range on both bounds
    pub fn range_inclusive(field: &str, gte: &str, lte: &str, format: &str) -> Self {
        Filter::Range {
            field: field.to_string(),
            gte: Some(gte.to_string()),
            lte: Some(lte.to_string()),
            format: Some(format.to_string()),
        }
    }

    /// Field this filter applies to
    pub fn field(&self) -> &str {
        match self {
            Filter::MatchPhrase { field, .. }
            | Filter::Term { field, .. }
            | Filter::Range { field, .. } => field,
        }
    }

    /// Convert filter to query DSL
    pub fn to_json(&self) -> Value {
        match self {
            Filter::MatchPhrase { field, value } => {
                json!({ "match_phrase": single_entry(field, value.clone()) })
            }
            Filter::Term { field, value } => {
                json!({ "term": single_entry(field, value.clone()) })
            }
            Filter::Range {
                field,
                gte,
                lte,
                format,
            } => {
                let mut bounds = Map::new();
                if let Some(gte) = gte {
                    bounds.insert("gte".to_string(), Value::String(gte.clone()));
                }
                if let Some(lte) = lte {
                    bounds.insert("lte".to_string(), Value::String(lte.clone()));
                }
                if let Some(format) = format {
                    bounds.insert("format".to_string(), Value::String(format.clone()));
                }
                json!({ "range": single_entry(field, Value::Object(bounds)) })
            }
        }
    }
}

fn single_entry(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}
