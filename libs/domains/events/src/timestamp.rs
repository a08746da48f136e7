//! Event timestamps.
//!
//! Timestamps are naive UTC date-times. Input accepts RFC 3339 (any offset is
//! normalized to UTC), naive ISO-8601 date-times, bare dates and Unix seconds.
//! MongoDB stores them as BSON datetimes with millisecond precision.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use mongodb::bson;
use serde::de::{self, Deserializer, Visitor};
use std::fmt;

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp string into a naive UTC date-time.
pub fn parse(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset.naive_utc());
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid datetime: '{}'", value))
}

fn from_unix_seconds(seconds: f64) -> Option<NaiveDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round() as i64;
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Serde `deserialize_with` adapter for [`parse`], also accepting Unix seconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    struct TimestampVisitor;

    impl Visitor<'_> for TimestampVisitor {
        type Value = NaiveDateTime;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an ISO-8601 datetime string or Unix timestamp")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            parse(value).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            self.visit_f64(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            self.visit_f64(value as f64)
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            from_unix_seconds(value)
                .ok_or_else(|| E::custom(format!("timestamp out of range: {}", value)))
        }
    }

    deserializer.deserialize_any(TimestampVisitor)
}

/// Convert to the BSON representation (millisecond precision).
pub fn to_bson(value: &NaiveDateTime) -> bson::DateTime {
    bson::DateTime::from_millis(value.and_utc().timestamp_millis())
}

/// Convert from BSON; `None` when outside chrono's representable range.
pub fn from_bson(value: bson::DateTime) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).map(|dt| dt.naive_utc())
}
