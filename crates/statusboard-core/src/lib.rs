//! statusboard-core: Polled status widgets for terminal dashboards
//!
//! This library provides the pieces a dashboard host needs to show a
//! service status panel: time formatting helpers, tolerant extraction of
//! the `/api/status` payload, and panel text rendering. Polling, auth
//! headers and drawing belong to the host.
//!
//! # Main Entry Points
//!
//! - [`widget`] - The [`Pollable`] capability and [`StatusWidget`]
//! - [`format`] - Relative and absolute timestamp formatting
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod format;
pub mod logging;
pub mod widget;

// Re-export commonly used types at crate root for convenience
pub use config::{StatusboardConfig, WidgetConfig};
pub use errors::{ConfigError, StatusboardError};
pub use format::{TimestampError, date_to_human_utc, uptime};
pub use widget::{
    ApiPassword, DisplayRecord, ErrorRecord, Pollable, Responses, StatusWidget, WidgetBase,
    WidgetData, WidgetError, decode_payload,
};

// Re-export logging initialization
pub use logging::init_logging;
