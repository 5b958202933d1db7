/*!
 * Serde utilities for common serialization/deserialization patterns.
 *
 * Timestamps crossing the engine boundary are strict ISO-8601 with millisecond
 * precision and a trailing `Z`; configuration numbers may arrive as strings
 * after `${VAR}` expansion.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Render an instant as `2024-06-20T08:19:24.908Z`
pub fn format_iso_millis(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for `DateTime<Utc>` fields rendered as strict ISO-8601 millis
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Event {
///     #[serde(with = "workflow_analytics::utils::serde::iso_millis")]
///     at: DateTime<Utc>,
/// }
/// ```
pub mod iso_millis {
    use super::*;

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_iso_millis(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|e| D::Error::custom(format!("Invalid ISO-8601 timestamp '{raw}': {e}")))
    }
}

/// Deserialize an unsigned number that may be represented as a number or string.
///
/// ```yaml
/// port: 443        # Direct integer
/// port: "443"      # String, e.g. after ${OPENSEARCH_PORT} expansion
/// ```
pub fn deserialize_flexible_u64<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value = serde_yaml::Value::deserialize(deserializer)?;
    match value {
        serde_yaml::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("Expected a non-negative integer, found: {n}"))),
        serde_yaml::Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("Cannot parse '{s}' as unsigned integer"))),
        other => Err(D::Error::custom(format!(
            "Expected numeric value, found: {other:?}"
        ))),
    }
}

/// [`deserialize_flexible_u64`] narrowed to `u16` (ports)
pub fn deserialize_flexible_u16<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value = deserialize_flexible_u64(deserializer)?;
    u16::try_from(value).map_err(|_| D::Error::custom(format!("{value} exceeds u16::MAX")))
}

/// [`deserialize_flexible_u64`] narrowed to `u32`
pub fn deserialize_flexible_u32<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value = deserialize_flexible_u64(deserializer)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("{value} exceeds u32::MAX")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::Serialize;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Stamped {
        #[serde(with = "iso_millis")]
        at: DateTime<Utc>,
    }

    #[derive(Debug, Deserialize)]
    struct Endpoint {
        #[serde(deserialize_with = "deserialize_flexible_u16")]
        port: u16,
    }

    #[test]
    fn test_iso_millis_always_has_three_fraction_digits() {
        let whole_second = Utc.with_ymd_and_hms(2024, 1, 16, 8, 19, 24).unwrap();
        assert_eq!(format_iso_millis(&whole_second), "2024-01-16T08:19:24.000Z");

        let stamped = Stamped {
            at: whole_second + chrono::Duration::milliseconds(908),
        };
        let json = serde_json::to_string(&stamped).unwrap();
        assert_eq!(json, r#"{"at":"2024-01-16T08:19:24.908Z"}"#);

        let back: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stamped);
    }

    #[test]
    fn test_iso_millis_rejects_garbage() {
        let result: Result<Stamped, _> = serde_json::from_str(r#"{"at":"yesterday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_flexible_port() {
        let numeric: Endpoint = serde_yaml::from_str("port: 443").unwrap();
        assert_eq!(numeric.port, 443);

        let quoted: Endpoint = serde_yaml::from_str("port: \"9200\"").unwrap();
        assert_eq!(quoted.port, 9200);

        let too_large: Result<Endpoint, _> = serde_yaml::from_str("port: 70000");
        assert!(too_large.is_err());

        let not_a_number: Result<Endpoint, _> = serde_yaml::from_str("port: \"https\"");
        assert!(not_a_number.is_err());
    }
}
