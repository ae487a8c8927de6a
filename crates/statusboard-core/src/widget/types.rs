//! Widget type definitions shared between the host and widgets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// Decoded poll results keyed by endpoint URL, as delivered by the host.
pub type Responses = HashMap<String, Value>;

/// Opaque API credential handed to the host for auth header injection.
///
/// `Debug` output is redacted so widgets can be logged freely.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiPassword(String);

impl ApiPassword {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw credential. Only the host's transport should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiPassword(<empty>)")
        } else {
            f.write_str("ApiPassword(<redacted>)")
        }
    }
}

impl From<String> for ApiPassword {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ApiPassword {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Construction-time data every polled widget hands to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetBase {
    /// Panel title
    pub title: String,
    /// URLs the host polls on the widget's behalf
    pub endpoints: Vec<String>,
    pub api_password: ApiPassword,
    /// Host-defined settings the widget itself does not interpret
    pub extra: Map<String, Value>,
}

impl WidgetBase {
    pub fn new(
        title: impl Into<String>,
        endpoints: Vec<String>,
        api_password: ApiPassword,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            title: title.into(),
            endpoints,
            api_password,
            extra,
        }
    }
}

/// Flat display record produced by one successful extraction.
///
/// A missing field means "not known yet" and renders as `Loading...`.
/// [`DisplayRecord::default`] is the state before the first poll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autostart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_updates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<String>,
}

/// Substituted for a record when the host's poll or transform failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::new(error.to_string())
    }
}

/// What the host passes to `render_content`.
///
/// As JSON, any object with a string `error` key is an [`ErrorRecord`]; any
/// other object is read as the widget's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidgetData<R> {
    Error(ErrorRecord),
    Record(R),
}

impl<R: Default> Default for WidgetData<R> {
    fn default() -> Self {
        WidgetData::Record(R::default())
    }
}

impl<R> From<ErrorRecord> for WidgetData<R> {
    fn from(error: ErrorRecord) -> Self {
        WidgetData::Error(error)
    }
}

impl From<DisplayRecord> for WidgetData<DisplayRecord> {
    fn from(record: DisplayRecord) -> Self {
        WidgetData::Record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_password_debug_is_redacted() {
        let password = ApiPassword::new("hunter2");
        assert_eq!(format!("{password:?}"), "ApiPassword(<redacted>)");
        assert_eq!(password.expose(), "hunter2");
        assert_eq!(
            format!("{:?}", ApiPassword::default()),
            "ApiPassword(<empty>)"
        );
    }

    #[test]
    fn test_widget_base_debug_hides_password() {
        let base = WidgetBase::new(
            "Status",
            vec!["http://localhost/api/status".to_string()],
            ApiPassword::from("hunter2"),
            Map::new(),
        );
        assert!(!format!("{base:?}").contains("hunter2"));
    }

    #[test]
    fn test_display_record_serializes_flat() {
        let record = DisplayRecord {
            status: Some("Running".to_string()),
            image_updates: Some("2".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"status": "Running", "image_updates": "2"})
        );
    }

    #[test]
    fn test_widget_data_error_takes_precedence() {
        let data: WidgetData<DisplayRecord> =
            serde_json::from_value(json!({"error": "boom", "status": "Running"})).unwrap();
        assert_eq!(data, WidgetData::Error(ErrorRecord::new("boom")));
    }

    #[test]
    fn test_widget_data_empty_object_is_pending_record() {
        let data: WidgetData<DisplayRecord> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(data, WidgetData::Record(DisplayRecord::default()));
        assert_eq!(data, WidgetData::default());
    }

    #[test]
    fn test_error_record_from_error() {
        let io = std::io::Error::other("connection refused");
        assert_eq!(ErrorRecord::from_error(&io).error, "connection refused");
    }
}
