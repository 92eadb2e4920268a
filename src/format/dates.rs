//! Timestamp normalization. All output is UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use super::{FormatInput, Input};

/// Output layout of [`format_timestamp`].
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Magnitudes at or above this are epoch milliseconds (10^11 s is year 5138).
const MILLIS_THRESHOLD: f64 = 1e11;

const SECONDS_PER_DAY: i64 = 86_400;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Formats an epoch (seconds or milliseconds) or ISO-8601 value as
/// `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Never fails: anything unparseable becomes `"N/A"`.
///
/// ```
/// use confluxscan_client::format::format_timestamp;
///
/// assert_eq!(format_timestamp(1_677_649_200), "2023-03-01 05:40:00");
/// assert_eq!(format_timestamp("1677649200000"), "2023-03-01 05:40:00");
/// assert_eq!(format_timestamp("2024-01-01T00:00:00Z"), "2024-01-01 00:00:00");
/// assert_eq!(format_timestamp("2024-13-45"), "N/A");
/// ```
pub fn format_timestamp(value: impl FormatInput) -> String {
    let input = value.as_input();
    match parse_timestamp(&input) {
        Some(datetime) => datetime.format(DISPLAY_FORMAT).to_string(),
        None => {
            debug!(value = ?input, "unparseable timestamp");
            "N/A".to_string()
        }
    }
}

/// Current Unix time in whole seconds.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Unix time 24 hours before now.
pub fn twenty_four_hours_ago() -> i64 {
    days_before(current_timestamp(), 1.0)
}

/// Unix time `days` (possibly fractional) before now.
pub fn time_ago(days: f64) -> i64 {
    days_before(current_timestamp(), days)
}

/// `now` minus `days`, truncated to whole seconds.
///
/// Offsets past the `i64` range saturate. `NaN` leaves `now` unchanged.
pub fn days_before(now: i64, days: f64) -> i64 {
    if days.is_nan() {
        return now;
    }
    // float-to-int casts saturate at the i64 bounds
    let seconds = (days * SECONDS_PER_DAY as f64).trunc() as i64;
    now.saturating_sub(seconds)
}

fn parse_timestamp(input: &Input<'_>) -> Option<DateTime<Utc>> {
    match input {
        Input::Absent => None,
        Input::Float(value) => from_epoch(*value),
        Input::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else if let Ok(value) = text.parse::<f64>() {
                from_epoch(value)
            } else {
                parse_iso(text)
            }
        }
    }
}

fn from_epoch(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let seconds = if value.abs() >= MILLIS_THRESHOLD {
        value / 1000.0
    } else {
        value
    };
    DateTime::from_timestamp(seconds.floor() as i64, 0)
}

fn parse_iso(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
