//! Lenient and strict timestamp parsing built on chrono.

use crate::format::errors::TimestampError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::borrow::Cow;

/// Spelled-out zones that mean UTC when they trail a timestamp.
const UTC_NAMES: &[&str] = &["UTC", "GMT", "Z"];

/// Non-ISO layouts without an offset. Values are taken as UTC.
const LENIENT_NAIVE_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d %b %Y %H:%M:%S",
    "%b %d %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%a %b %e %H:%M:%S %Y",
];

const LENIENT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y%m%d",
    "%Y/%m/%d",
    "%d %b %Y",
    "%b %d, %Y",
];

/// ISO-8601 date-time layouts, extended and basic. `T` or a space may
/// separate date and time in extended form.
const ISO_NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

const ISO_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Parse a timestamp in any of the common layouts services emit.
///
/// Accepts RFC 3339, ISO-8601 (extended or basic, offsets as `Z`, `±HH`,
/// `±HHMM` or `±HH:MM`), RFC 2822, a trailing `UTC`/`GMT` zone name,
/// slash-separated dates and a few spelled-month forms. A value without a
/// timezone is interpreted as UTC; a value with one is converted to UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let unzoned = strip_utc_name(trimmed);

    if let (body, Some(raw_offset)) = split_offset(unzoned)
        && let Some(offset) = parse_offset(raw_offset)
        && let Some(local) = parse_iso_naive(body).or_else(|| parse_lenient_naive(body))
        && let Some(parsed) = offset.from_local_datetime(&local).single()
    {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Some(parsed) = parse_iso_naive(unzoned).or_else(|| parse_lenient_naive(unzoned)) {
        return Ok(parsed.and_utc());
    }

    LENIENT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(unzoned, fmt).ok())
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .ok_or_else(|| TimestampError::Unparsable {
            input: input.to_string(),
        })
}

/// Parse a strict ISO-8601 timestamp and return its wall-clock value.
///
/// Extended (`2024-03-04T13:05:00`) and basic (`20240304T130500`) forms,
/// reduced precision down to the hour, and date-only values are accepted.
/// An offset (`Z`, `±HH`, `±HHMM`, `±HH:MM`) must be well formed but is not
/// applied: `13:05+02:00` yields `13:05`. No surrounding whitespace or
/// free-form layouts.
pub fn parse_iso_timestamp(input: &str) -> Result<NaiveDateTime, TimestampError> {
    if input.is_empty() {
        return Err(TimestampError::Empty);
    }

    let unparsable = || TimestampError::Unparsable {
        input: input.to_string(),
    };

    let (body, raw_offset) = split_offset(input);
    if let Some(raw_offset) = raw_offset {
        parse_offset(raw_offset).ok_or_else(unparsable)?;
        return parse_iso_naive(body).ok_or_else(unparsable);
    }

    parse_iso_naive(body)
        .or_else(|| {
            ISO_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(body, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(unparsable)
}

fn parse_iso_naive(body: &str) -> Option<NaiveDateTime> {
    let body = expand_hour_only(body);
    ISO_NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&body, fmt).ok())
}

fn parse_lenient_naive(body: &str) -> Option<NaiveDateTime> {
    LENIENT_NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(body, fmt).ok())
}

/// chrono needs minutes, so `2024-03-04T13` becomes `2024-03-04T13:00`
/// and `20240304T13` becomes `20240304T1300`.
fn expand_hour_only(body: &str) -> Cow<'_, str> {
    let bytes = body.as_bytes();
    match bytes.len() {
        13 if matches!(bytes[10], b'T' | b' ') => Cow::Owned(format!("{body}:00")),
        11 if bytes[8] == b'T' => Cow::Owned(format!("{body}00")),
        _ => Cow::Borrowed(body),
    }
}

/// Drop a trailing ` UTC`, ` GMT` or ` Z` zone name (case-insensitive).
fn strip_utc_name(input: &str) -> &str {
    match input.rsplit_once(' ') {
        Some((head, tail)) if UTC_NAMES.iter().any(|name| tail.eq_ignore_ascii_case(name)) => {
            head.trim_end()
        }
        _ => input,
    }
}

/// Split a trailing `Z` or `±...` offset off the time part.
///
/// Only a sign after the date/time separator counts, so the dashes of an
/// extended date are never taken for an offset.
fn split_offset(input: &str) -> (&str, Option<&str>) {
    if let Some(body) = input.strip_suffix(['Z', 'z']) {
        return (body.trim_end(), Some("+00:00"));
    }

    let Some(separator) = input.find(['T', ' ']) else {
        return (input, None);
    };

    match input[separator..].rfind(['+', '-']) {
        Some(relative) => {
            let at = separator + relative;
            (input[..at].trim_end(), Some(&input[at..]))
        }
        None => (input, None),
    }
}

/// Parse `±HH`, `±HHMM` or `±HH:MM`.
fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, rest) = if let Some(rest) = raw.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = raw.strip_prefix('-') {
        (-1, rest)
    } else {
        return None;
    };

    if !rest.is_ascii() {
        return None;
    }

    let (hours, minutes) = match rest.len() {
        2 => (rest, "00"),
        4 => rest.split_at(2),
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        _ => return None,
    };

    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3_600 + minutes * 60))
}
