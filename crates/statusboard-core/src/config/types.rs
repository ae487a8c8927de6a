//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [widget]
//! title = "Status"
//! api_base = "http://localhost:3000"
//! api_password = "secret"
//!
//! [widget.extra]
//! border = "rounded"
//! ```

use crate::widget::ApiPassword;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.statusboard/config.toml`
/// 2. Project config: `./.statusboard/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusboardConfig {
    /// Status widget settings
    #[serde(default)]
    pub widget: WidgetConfig,
}

/// Settings for the status widget.
///
/// All fields are optional so that each config layer only overrides what it
/// sets. Use the accessors for values with defaults applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Panel title.
    /// Default: "Status".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Base URL of the service API, e.g. `http://localhost:3000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Credential the host sends with each poll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_password: Option<ApiPassword>,

    /// Host-defined settings passed through to the widget untouched.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}
