use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::serde::iso_millis;

/// Failed executions observed within one minute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedExecutionBucket {
    #[serde(with = "iso_millis")]
    pub bucket_start: DateTime<Utc>,
    pub executions: Vec<FailedExecutionRecord>,
}

impl FailedExecutionBucket {
    pub fn is_empty(&self) -> bool {
        self.executions.is_empty()
    }
}

/// One failed execution and the dominant term of each of its attributes
///
/// Attributes are `None` when the engine returned no term for them, e.g. an
/// execution that failed without emitting an `error_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedExecutionRecord {
    pub execution_id: String,
    pub event_id: Option<String>,
    pub workflow_id: Option<String>,
    pub workflow_name: Option<String>,
    pub error_code: Option<String>,
}
