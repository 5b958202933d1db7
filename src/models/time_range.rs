use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::utils::serde::{format_iso_millis, iso_millis};

/// Inclusive analytics window `[from, to]`
///
/// Both bounds are UTC instants. Construction through [`TimeRange::new`] or
/// [`TimeRange::parse`] guarantees `from <= to`; the query builder re-checks the
/// invariant because the fields are public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(with = "iso_millis")]
    pub from: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub to: DateTime<Utc>,
}

impl TimeRange {
    /// Create a validated range
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self> {
        let range = Self { from, to };
        range.validate()?;
        Ok(range)
    }

    /// Parse RFC 3339 / ISO-8601 bounds (any offset, normalized to UTC)
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        let parse_bound = |raw: &str, name: &str| {
            DateTime::parse_from_rfc3339(raw)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|e| {
                    AnalyticsError::invalid_range(from, to, format!("{name} is not ISO-8601: {e}"))
                })
        };

        Self::new(parse_bound(from, "from")?, parse_bound(to, "to")?)
    }

    /// Check `from <= to`
    pub fn validate(&self) -> Result<()> {
        if self.from > self.to {
            return Err(AnalyticsError::invalid_range(
                self.from_iso(),
                self.to_iso(),
                "from must not be after to",
            ));
        }
        Ok(())
    }

    /// Lower bound as sent to the engine
    pub fn from_iso(&self) -> String {
        format_iso_millis(&self.from)
    }

    /// Upper bound as sent to the engine
    pub fn to_iso(&self) -> String {
        format_iso_millis(&self.to)
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.from <= *instant && *instant <= self.to
    }
}
