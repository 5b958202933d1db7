use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Distinct executions of a tenant over the queried window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExecutionTotals {
    pub total_executions: u64,
    pub failed_executions: u64,
}

impl ExecutionTotals {
    pub fn succeeded_executions(&self) -> u64 {
        self.total_executions.saturating_sub(self.failed_executions)
    }
}

/// Distinct executions of a tenant on one calendar day (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyExecutionMetric {
    pub date: NaiveDate,
    pub total_executions: u64,
    pub failed_executions: u64,
}
