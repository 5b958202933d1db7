//! # Analytics Configuration
//!
//! YAML-based configuration for the search engine connection and logging,
//! with development/test/production overrides in the same file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use workflow_analytics::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration (environment auto-detected)
//! let manager = ConfigManager::load()?;
//!
//! let index = &manager.config().search.index;
//! let timeout = manager.config().search.request_timeout();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::serde::{deserialize_flexible_u16, deserialize_flexible_u32, deserialize_flexible_u64};

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

/// Root configuration structure mirroring analytics-config.yaml
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// Search engine connection settings
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// OpenSearch connection settings handed to the [`SearchClient`](crate::client::SearchClient) implementation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_flexible_u16")]
    pub port: u16,
    /// AWS region used for request signing
    pub region: String,
    /// AWS service name used for request signing (`es` for managed OpenSearch)
    pub service: String,
    /// Index (or alias) holding workflow execution events
    pub index: String,
    #[serde(deserialize_with = "deserialize_flexible_u32")]
    pub pool_maxsize: u32,
    #[serde(deserialize_with = "deserialize_flexible_u64")]
    pub request_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 443,
            region: "eu-central-1".to_string(),
            service: "es".to_string(),
            index: "workflow-execution-events".to_string(),
            pool_maxsize: 20,
            request_timeout_ms: 10_000,
        }
    }
}

impl SearchConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// `https://host:port`; the engine is only reachable over TLS
    pub fn endpoint(&self) -> String {
        format!("https://{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when neither `LOG_LEVEL` nor `RUST_LOG` is set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl AnalyticsConfig {
    /// Validate configuration for consistency and required fields
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.search.host.trim().is_empty() {
            return Err(ConfigurationError::missing_required_field(
                "search.host",
                "search configuration",
            ));
        }

        if self.search.host.contains("${") {
            return Err(ConfigurationError::invalid_value(
                "search.host",
                self.search.host.clone(),
                "unexpanded ${VAR} placeholder; set the environment variable",
            ));
        }

        if self.search.index.trim().is_empty() {
            return Err(ConfigurationError::missing_required_field(
                "search.index",
                "search configuration",
            ));
        }

        if self.search.region.trim().is_empty() {
            return Err(ConfigurationError::missing_required_field(
                "search.region",
                "search configuration",
            ));
        }

        if self.search.port == 0 {
            return Err(ConfigurationError::invalid_value(
                "search.port",
                "0",
                "port must be greater than 0",
            ));
        }

        if self.search.pool_maxsize == 0 {
            return Err(ConfigurationError::invalid_value(
                "search.pool_maxsize",
                "0",
                "pool size must be greater than 0",
            ));
        }

        if self.search.request_timeout_ms == 0 {
            return Err(ConfigurationError::invalid_value(
                "search.request_timeout_ms",
                "0",
                "request timeout must be greater than 0",
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigurationError::invalid_value(
                "logging.level",
                self.logging.level.clone(),
                format!("expected one of {}", LOG_LEVELS.join(", ")),
            ));
        }

        Ok(())
    }
}
