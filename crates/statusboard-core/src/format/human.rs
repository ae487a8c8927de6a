//! Human-friendly timestamp text for the status panel.

use crate::format::parse::{parse_iso_timestamp, parse_timestamp};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Placeholder shown for any value that cannot be derived.
pub const NOT_AVAILABLE: &str = "N/A";

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Time elapsed since `timestamp` (a service start time), e.g. `"2d 3h 15m 42s"`.
///
/// Returns `"N/A"` when the timestamp is absent or cannot be parsed.
pub fn uptime(timestamp: Option<&str>) -> String {
    uptime_at(timestamp, Utc::now())
}

/// Same as [`uptime`], measured against an explicit `now`.
pub fn uptime_at(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = timestamp else {
        return NOT_AVAILABLE.to_string();
    };

    match parse_timestamp(raw) {
        Ok(started_at) => format_elapsed(now.signed_duration_since(started_at).num_seconds()),
        Err(e) => {
            debug!(
                event = "core.format.timestamp_unparsable",
                helper = "uptime",
                error = %e
            );
            NOT_AVAILABLE.to_string()
        }
    }
}

/// Render a number of elapsed seconds as `"{d}d {h}h {m}m {s}s"`.
///
/// Days, hours and minutes appear only when non-zero; seconds always do.
/// Negative input (a start time in the future) is treated as zero.
pub fn format_elapsed(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    let days = total / SECONDS_PER_DAY;
    let remainder = total % SECONDS_PER_DAY;
    let hours = remainder / SECONDS_PER_HOUR;
    let minutes = (remainder % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = remainder % SECONDS_PER_MINUTE;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{seconds}s"));

    parts.join(" ")
}

/// Absolute date for display, e.g. `"Mar 4, 2024 13:05 UTC"`.
///
/// Only strict ISO-8601 input is accepted. The wall-clock value is labelled
/// UTC as written; an embedded offset is not applied.
pub fn date_to_human_utc(timestamp: Option<&str>) -> String {
    let Some(raw) = timestamp else {
        return NOT_AVAILABLE.to_string();
    };

    match parse_iso_timestamp(raw) {
        Ok(wall_clock) => wall_clock.format("%b %-d, %Y %H:%M UTC").to_string(),
        Err(e) => {
            debug!(
                event = "core.format.timestamp_unparsable",
                helper = "date_to_human_utc",
                error = %e
            );
            NOT_AVAILABLE.to_string()
        }
    }
}
