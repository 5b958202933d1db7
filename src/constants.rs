//! # Search Schema Constants
//!
//! Field names, aggregation names and format tokens shared by the query builder
//! and the result projectors. The event index schema is owned by the ingestion
//! pipeline; every name it exposes to this crate is declared here.

/// Document fields of the workflow event index
pub mod fields {
    pub const OWNER_ID: &str = "owner_id";
    pub const IS_EXTERNAL: &str = "is_external";
    pub const EVENT_TIMESTAMP: &str = "event_timestamp";
    pub const STATUS: &str = "status";
    pub const EXECUTION_ID: &str = "execution_id";
    pub const EVENT_ID: &str = "event_id";
    pub const WORKFLOW_ID: &str = "workflow_id";
    pub const WORKFLOW_NAME: &str = "workflow_name";
    pub const ERROR_CODE: &str = "error_code";
}

/// Values of the `status` field
pub mod status {
    pub const ERROR: &str = "ERROR";
}

/// Names given to aggregations in request bodies and read back from responses
pub mod aggregations {
    pub const BY_DATE: &str = "by_date";
    pub const FAILED_EXECUTIONS: &str = "failed_executions";
    pub const TOTAL_EXECUTIONS: &str = "total_executions";
    pub const INTEGRATIONS: &str = "integrations";
    pub const WORKFLOW_NAME: &str = "workflow_name";
    pub const LAST_EVENT_DATE: &str = "last_event_date";
    pub const UNIQUE_EXECUTIONS: &str = "unique_executions";
    pub const FAILED_COUNT: &str = "failed_count";
    pub const EVENT_ID: &str = "event_id";
    pub const WORKFLOW_ID: &str = "workflow_id";
    pub const ERROR_CODE: &str = "error_code";
}

/// Keys of the engine's response envelope
pub mod response {
    pub const AGGREGATIONS: &str = "aggregations";
    pub const BUCKETS: &str = "buckets";
    pub const KEY: &str = "key";
    pub const KEY_AS_STRING: &str = "key_as_string";
    pub const VALUE: &str = "value";
    pub const VALUE_AS_STRING: &str = "value_as_string";
    pub const DOC_COUNT: &str = "doc_count";
}

/// Date formats understood by the engine and by the projectors
pub mod formats {
    /// Engine format token used on range filters
    pub const RANGE_FORMAT: &str = "strict_date_optional_time";

    /// Output format of minute buckets (engine side, Joda syntax)
    pub const MINUTE_BUCKET_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";

    /// Output format of day buckets (engine side, Joda syntax)
    pub const DAY_BUCKET_FORMAT: &str = "yyyy-MM-dd";

    /// chrono equivalent of [`MINUTE_BUCKET_FORMAT`]
    pub const MINUTE_BUCKET_PARSE: &str = "%Y-%m-%d %H:%M:%S";

    /// chrono equivalent of [`DAY_BUCKET_FORMAT`]
    pub const DAY_BUCKET_PARSE: &str = "%Y-%m-%d";

    /// Strict ISO-8601 with millisecond precision and a trailing `Z`
    pub const ISO_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
}

/// Histogram intervals
pub mod intervals {
    pub const MINUTE: &str = "minute";
    pub const DAY: &str = "day";
}

/// Request defaults
pub mod request {
    /// Analytics requests only read aggregations
    pub const NO_HITS: u32 = 0;
    pub const FIRST_PAGE: u32 = 0;
}
