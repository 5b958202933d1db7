//! # Analytics Error Types
//!
//! Structured errors for query construction, response projection and the
//! search client collaborator.

use thiserror::Error;

use crate::client::SearchClientError;
use crate::config::ConfigurationError;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// The requested time window is unusable (`from > to` or unparsable bounds)
    #[error("Invalid time range [{from} .. {to}]: {reason}")]
    InvalidRange {
        from: String,
        to: String,
        reason: String,
    },

    /// The tenant scope cannot be queried
    #[error("Invalid tenant scope: {reason}")]
    InvalidScope { reason: String },

    /// The engine response does not have the expected aggregation shape
    #[error("Malformed search response at '{path}': {reason}")]
    MalformedResponse { path: String, reason: String },

    #[error("Search request failed: {0}")]
    Search(#[from] SearchClientError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl AnalyticsError {
    pub fn invalid_range(
        from: impl Into<String>,
        to: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRange {
            from: from.into(),
            to: to.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_scope(reason: impl Into<String>) -> Self {
        Self::InvalidScope {
            reason: reason.into(),
        }
    }

    pub fn malformed_response(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Caller-side input problems, fixable by correcting parameters
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::InvalidRange { .. } | Self::InvalidScope { .. })
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
