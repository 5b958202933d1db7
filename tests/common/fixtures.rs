use serde_json::Value;
use std::path::PathBuf;
use workflow_analytics::models::{TenantScope, TimeRange};

pub const FIXTURE_OWNER_ID: &str = "owner_id";

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("resources")
        .join("opensearch")
        .join(name)
}

/// Parse a fixture under tests/resources/opensearch; key order is preserved
pub fn load_fixture(name: &str) -> Value {
    let path = fixture_path(name);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("fixture {} is not valid JSON: {e}", path.display()))
}

pub fn fixture_scope() -> TenantScope {
    TenantScope::internal(FIXTURE_OWNER_ID).unwrap()
}

/// Window used by the failed-executions request fixture
pub fn failed_executions_range() -> TimeRange {
    TimeRange::parse("2024-01-16T08:19:24.908Z", "2024-06-20T08:19:24.908Z").unwrap()
}

/// Window used by the integrations request fixture
pub fn integrations_range() -> TimeRange {
    TimeRange::parse("2024-05-20T08:19:24.908Z", "2024-06-20T08:19:24.908Z").unwrap()
}
