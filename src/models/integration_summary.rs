use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::serde::iso_millis;

/// Health summary of one workflow integration over the queried window
///
/// Counts are distinct executions, not events: an execution emits one event
/// per status change. `failed_executions <= total_executions` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationSummary {
    pub workflow_id: String,
    pub workflow_name: Option<String>,
    #[serde(with = "iso_millis")]
    pub last_event_at: DateTime<Utc>,
    pub total_executions: u64,
    pub failed_executions: u64,
}

impl IntegrationSummary {
    /// Share of executions that failed, in `[0.0, 1.0]`
    pub fn failure_ratio(&self) -> f64 {
        if self.total_executions == 0 {
            return 0.0;
        }
        self.failed_executions as f64 / self.total_executions as f64
    }
}
