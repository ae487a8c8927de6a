//! Timestamp formatting for panel display.
//!
//! Parsing returns explicit [`TimestampError`]s; the display helpers map any
//! failure to the `"N/A"` placeholder so a bad timestamp never aborts a poll
//! cycle.

pub mod errors;
pub mod human;
pub mod parse;

pub use errors::TimestampError;
pub use human::{NOT_AVAILABLE, date_to_human_utc, format_elapsed, uptime, uptime_at};
pub use parse::{parse_iso_timestamp, parse_timestamp};
