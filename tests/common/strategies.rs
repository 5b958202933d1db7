use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

/// Owner ids as issued by the account service: non-empty, no surrounding whitespace
pub fn owner_id_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9_-]{0,35}"
}

/// Whitespace-only strings, including the empty string
pub fn blank_owner_id_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

/// Instants between 2020-01-01 and 2030-01-01 with millisecond precision
pub fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    (0i64..315_360_000_000).prop_map(move |millis| start + Duration::milliseconds(millis))
}

/// Ordered (from, to) pairs, possibly equal
pub fn ordered_window_strategy() -> impl Strategy<Value = (DateTime<Utc>, DateTime<Utc>)> {
    (instant_strategy(), instant_strategy())
        .prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

/// Strictly reversed (from, to) pairs
pub fn reversed_window_strategy() -> impl Strategy<Value = (DateTime<Utc>, DateTime<Utc>)> {
    (instant_strategy(), 1i64..86_400_000)
        .prop_map(|(to, gap)| (to + Duration::milliseconds(gap), to))
}

/// (total, failed) cardinality pairs, including approximations where failed > total
pub fn cardinality_pair_strategy() -> impl Strategy<Value = (u64, u64)> {
    (0u64..10_000, 0u64..10_000)
}
