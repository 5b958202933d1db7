use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// Tenant whose events are queried
///
/// `include_external` is matched exactly against the `is_external` flag of each
/// event: `false` restricts the query to internal events only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantScope {
    pub owner_id: String,
    #[serde(default)]
    pub include_external: bool,
}

impl TenantScope {
    pub fn new(owner_id: impl Into<String>, include_external: bool) -> Result<Self> {
        let scope = Self {
            owner_id: owner_id.into(),
            include_external,
        };
        scope.validate()?;
        Ok(scope)
    }

    /// Internal events of a single owner
    pub fn internal(owner_id: impl Into<String>) -> Result<Self> {
        Self::new(owner_id, false)
    }

    pub fn validate(&self) -> Result<()> {
        if self.owner_id.trim().is_empty() {
            return Err(AnalyticsError::invalid_scope("owner_id must not be empty"));
        }
        Ok(())
    }
}
