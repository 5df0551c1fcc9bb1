//! Date/time utilities for displaying post timestamps.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Default display format for post timestamps.
pub const DEFAULT_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Current Unix time in seconds.
pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Check whether a timezone name is known (e.g., "Europe/Rome", "UTC").
pub fn is_valid_timezone(timezone: &str) -> bool {
    timezone.parse::<Tz>().is_ok()
}

/// Format a Unix timestamp (seconds) in the specified timezone.
///
/// # Arguments
///
/// * `timestamp` - Seconds since the Unix epoch
/// * `timezone` - Timezone name (e.g., "Asia/Tokyo", "UTC")
/// * `format` - Output format string (e.g., "%Y/%m/%d %H:%M")
///
/// # Returns
///
/// Formatted datetime string. An unknown timezone falls back to UTC; a
/// timestamp outside chrono's range is returned as the raw number.
pub fn format_timestamp(timestamp: i64, timezone: &str, format: &str) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return timestamp.to_string();
    };
    format_utc_datetime(&dt, timezone, format)
}

/// Format a DateTime<Utc> to the specified timezone.
pub fn format_utc_datetime(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => return dt.format(format).to_string(),
    };
    dt.with_timezone(&tz).format(format).to_string()
}
