//! Frontmatter date parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_yaml::Value;

/// Date assigned to posts without a usable `date`; sorts after every
/// post-1970 date.
pub const SENTINEL: DateTime<Utc> = DateTime::UNIX_EPOCH;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y/%m/%d %H:%M:%S%.f %z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Sort key for a post: its parsed date, or [`SENTINEL`]
pub fn sort_key(value: Option<&Value>) -> DateTime<Utc> {
    value.and_then(parse_date).unwrap_or(SENTINEL)
}

/// Parse a frontmatter `date` value.
///
/// Strings are tried as RFC 3339, RFC 2822, ISO 8601 with a `+hhmm`
/// offset, then the common blog layouts (`2024-01-15`, `2024/01/15 10:30`,
/// ...). Layouts without an offset are read as UTC. Integers are
/// milliseconds since the epoch.
pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_string(s),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::Tagged(tagged) => parse_date(&tagged.value),
        _ => None,
    }
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// `YYYY-MM-DD`, or a dash placeholder for undated posts
pub fn display_date(value: Option<&Value>) -> String {
    match value.and_then(parse_date) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "----------".to_string(),
    }
}
