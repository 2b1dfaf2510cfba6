//! # Time Utilities
//!
//! Timestamps stamped onto new user records.

use chrono::{DateTime, SecondsFormat, Utc};

/// Milliseconds since the Unix epoch for the given time.
pub fn now_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Format time as an RFC 3339 string with millisecond precision and a `Z` suffix.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
