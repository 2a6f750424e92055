//! Node uptime as a natural-language duration.

const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;

/// `"<value> <unit>"`, with an `s` only when the value is greater than one.
/// Zero stays singular ("0 minute").
fn pluralize(value: u64, unit: &str) -> String {
    if value > 1 {
        format!("{} {}s", value, unit)
    } else {
        format!("{} {}", value, unit)
    }
}

/// Humanize an uptime given in seconds.
///
/// Only the non-zero higher units are emitted, most significant first:
/// `"2 days, 3 hours, 45 minutes"`, `"2 hours, 30 minutes"`, `"5 minutes"`.
/// Once an hour has elapsed the minute segment is always present, even when
/// it is zero.
pub fn humanize_uptime(uptime_seconds: u64) -> String {
    let total_minutes = uptime_seconds as f64 / SECONDS_PER_MINUTE;
    let total_hours = total_minutes / MINUTES_PER_HOUR;
    let days = (total_hours / HOURS_PER_DAY).floor();

    let mut parts = Vec::with_capacity(3);

    if days > 0.0 {
        parts.push(pluralize(days as u64, "day"));
    }

    if total_hours.floor() > 0.0 {
        let remaining_hours = total_hours - HOURS_PER_DAY * days;
        let hours = remaining_hours.floor();
        let minutes = ((remaining_hours - hours) * MINUTES_PER_HOUR).floor();
        parts.push(pluralize(hours as u64, "hour"));
        parts.push(pluralize(minutes as u64, "minute"));
    } else {
        parts.push(pluralize(total_minutes.floor() as u64, "minute"));
    }

    parts.join(", ")
}
