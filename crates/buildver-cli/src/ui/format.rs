//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};

const SECS_PER_MIN: i64 = 60;
const SECS_PER_HOUR: i64 = SECS_PER_MIN * 60;
const SECS_PER_DAY: i64 = SECS_PER_HOUR * 24;
const SECS_PER_YEAR: i64 = SECS_PER_DAY * 365;

/// Describe how long ago something happened using its largest unit,
/// e.g. "3 days ago" or "1 min ago".
///
/// Returns an empty string when no time (or negative time) has elapsed.
pub fn format_elapsed(seconds: i64) -> String {
    if seconds <= 0 {
        return String::new();
    }
    let units = [
        (SECS_PER_YEAR, "year"),
        (SECS_PER_DAY, "day"),
        (SECS_PER_HOUR, "hour"),
        (SECS_PER_MIN, "min"),
        (1, "sec"),
    ];
    for (size, name) in units {
        let count = seconds / size;
        if count > 0 {
            let plural = if count > 1 { "s" } else { "" };
            return format!("{} {}{} ago", count, name, plural);
        }
    }
    String::new()
}

/// Elapsed description for a unix timestamp, relative to `now`.
pub fn elapsed_since(timestamp: i64, now: DateTime<Utc>) -> String {
    format_elapsed(now.timestamp() - timestamp)
}

/// Format a unix timestamp for display.
pub fn format_timestamp(timestamp: i64, pretty: bool) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(dt) if pretty => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        Some(dt) => dt.to_rfc3339(),
        None => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_units() {
        assert_eq!(format_elapsed(1), "1 sec ago");
        assert_eq!(format_elapsed(59), "59 secs ago");
        assert_eq!(format_elapsed(60), "1 min ago");
        assert_eq!(format_elapsed(2 * 3600 + 5), "2 hours ago");
        assert_eq!(format_elapsed(3 * 86_400), "3 days ago");
        assert_eq!(format_elapsed(400 * 86_400), "1 year ago");
    }

    #[test]
    fn test_format_elapsed_zero_is_empty() {
        assert_eq!(format_elapsed(0), "");
        assert_eq!(format_elapsed(-5), "");
    }

    #[test]
    fn test_elapsed_since() {
        let now = DateTime::<Utc>::from_timestamp(1_700_000_600, 0).unwrap();
        assert_eq!(elapsed_since(1_700_000_000, now), "10 mins ago");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0, true), "1970-01-01 00:00 UTC");
        assert_eq!(format_timestamp(0, false), "1970-01-01T00:00:00+00:00");
    }
}
