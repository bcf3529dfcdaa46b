//! Shared serde helpers for the catalog document format.

use chrono::{Local, NaiveDateTime, Timelike};

/// Wall-clock format used for `last_updated` and `created_date`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, truncated to whole seconds so that a value survives a
/// trip through [`TIMESTAMP_FORMAT`] unchanged.
pub fn now_timestamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Serde adapter for timestamps stored as `"YYYY-MM-DD HH:MM:SS"` strings.
///
/// Also accepts the ISO `T` separator on input.
pub mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", s, e)))
    }
}

/// Serde default function that returns `true`.
pub fn default_true() -> bool {
    true
}
