use crate::format::{NOT_AVAILABLE, date_to_human_utc, uptime_at};
use crate::widget::errors::WidgetError;
use crate::widget::types::{DisplayRecord, ErrorRecord};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Placeholder for fields that have not been polled yet.
pub const LOADING: &str = "Loading...";

/// Decode a raw `/api/status` response body.
///
/// A body that is not JSON (an HTML error page from a proxy, a truncated
/// read) is an error the host reports through an [`ErrorRecord`].
pub fn decode_payload(body: &str) -> Result<Value, WidgetError> {
    Ok(serde_json::from_str(body)?)
}

/// JSON truthiness: `false`, `null`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

/// Text for a scalar payload value. Strings are unquoted, `null` is absent.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Build the display record for one `/api/status` payload.
///
/// Every lookup tolerates absence and wrong JSON types; the record always
/// has all six fields set.
pub fn extract_display_record(payload: &Value, now: DateTime<Utc>) -> DisplayRecord {
    let image_updates = payload.get("imageUpdates");

    let status = if payload.get("serviceStatus").and_then(Value::as_str) == Some("running") {
        "Running"
    } else {
        "Not Running"
    };

    let docker = if is_truthy(payload.get("dockerAvailable")) {
        "Available"
    } else {
        "Not Available"
    };

    let autostart = if is_truthy(payload.get("autoStart")) {
        "Enabled"
    } else {
        "Not Enabled"
    };

    let available = image_updates
        .and_then(|updates| updates.get("available"))
        .and_then(display_value)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let last_checked = image_updates
        .and_then(|updates| updates.get("lastChecked"))
        .map_or(Some(NOT_AVAILABLE), Value::as_str);

    DisplayRecord {
        status: Some(status.to_string()),
        docker: Some(docker.to_string()),
        autostart: Some(autostart.to_string()),
        uptime: Some(uptime_at(
            payload.get("uptime").and_then(Value::as_str),
            now,
        )),
        image_updates: Some(available),
        last_checked: Some(date_to_human_utc(last_checked)),
    }
}

/// Six label/value lines in fixed order, `Loading...` for missing values.
pub fn render_display_record(record: &DisplayRecord) -> String {
    let value = |field: &Option<String>| field.as_deref().unwrap_or(LOADING).to_string();

    [
        format!("Service Status : {}", value(&record.status)),
        format!("Docker Status  : {}", value(&record.docker)),
        format!("Auto-start     : {}", value(&record.autostart)),
        format!("Uptime         : {}", value(&record.uptime)),
        format!("Image Updates  : {}", value(&record.image_updates)),
        format!("Last Checked   : {}", value(&record.last_checked)),
    ]
    .join("\n")
}

/// Error text wrapped in host-interpreted bold red markup.
pub fn render_error(record: &ErrorRecord) -> String {
    format!("[bold red]{}[/bold red]", record.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 13, 5, 0).unwrap()
    }

    #[test]
    fn test_extract_full_payload() {
        let payload = json!({
            "serviceStatus": "running",
            "dockerAvailable": true,
            "autoStart": false,
            "uptime": "2024-03-04T13:04:30Z",
            "imageUpdates": {"available": 2, "lastChecked": "2024-03-04T13:05:00Z"}
        });

        let record = extract_display_record(&payload, now());

        assert_eq!(record.status.as_deref(), Some("Running"));
        assert_eq!(record.docker.as_deref(), Some("Available"));
        assert_eq!(record.autostart.as_deref(), Some("Not Enabled"));
        assert_eq!(record.uptime.as_deref(), Some("1d 30s"));
        assert_eq!(record.image_updates.as_deref(), Some("2"));
        assert_eq!(
            record.last_checked.as_deref(),
            Some("Mar 4, 2024 13:05 UTC")
        );
    }

    #[test]
    fn test_extract_empty_payload() {
        let record = extract_display_record(&json!({}), now());

        assert_eq!(record.status.as_deref(), Some("Not Running"));
        assert_eq!(record.docker.as_deref(), Some("Not Available"));
        assert_eq!(record.autostart.as_deref(), Some("Not Enabled"));
        assert_eq!(record.uptime.as_deref(), Some("N/A"));
        assert_eq!(record.image_updates.as_deref(), Some("N/A"));
        assert_eq!(record.last_checked.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_extract_wrong_types_degrade() {
        let payload = json!({
            "serviceStatus": 1,
            "dockerAvailable": "yes",
            "autoStart": 0,
            "uptime": 12345,
            "imageUpdates": "none"
        });

        let record = extract_display_record(&payload, now());

        assert_eq!(record.status.as_deref(), Some("Not Running"));
        assert_eq!(record.docker.as_deref(), Some("Available"));
        assert_eq!(record.autostart.as_deref(), Some("Not Enabled"));
        assert_eq!(record.uptime.as_deref(), Some("N/A"));
        assert_eq!(record.image_updates.as_deref(), Some("N/A"));
        assert_eq!(record.last_checked.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_extract_non_object_payload() {
        for payload in [json!(null), json!([1, 2]), json!("running")] {
            let record = extract_display_record(&payload, now());
            assert_eq!(record.status.as_deref(), Some("Not Running"));
            assert_eq!(record.image_updates.as_deref(), Some("N/A"));
        }
    }

    #[test]
    fn test_extract_status_is_case_sensitive() {
        let record = extract_display_record(&json!({"serviceStatus": "Running"}), now());
        assert_eq!(record.status.as_deref(), Some("Not Running"));
    }

    #[test]
    fn test_extract_image_updates_partial() {
        let record = extract_display_record(
            &json!({"imageUpdates": {"lastChecked": "2024-01-09T08:00:00Z"}}),
            now(),
        );
        assert_eq!(record.image_updates.as_deref(), Some("N/A"));
        assert_eq!(
            record.last_checked.as_deref(),
            Some("Jan 9, 2024 08:00 UTC")
        );

        let record = extract_display_record(
            &json!({"imageUpdates": {"available": null, "lastChecked": 17}}),
            now(),
        );
        assert_eq!(record.image_updates.as_deref(), Some("N/A"));
        assert_eq!(record.last_checked.as_deref(), Some("N/A"));

        let record =
            extract_display_record(&json!({"imageUpdates": {"available": "3"}}), now());
        assert_eq!(record.image_updates.as_deref(), Some("3"));
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!(1))));
        assert!(is_truthy(Some(&json!(0.5))));
        assert!(is_truthy(Some(&json!("x"))));
        assert!(is_truthy(Some(&json!([0]))));
        assert!(is_truthy(Some(&json!({"a": 1}))));

        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!([]))));
        assert!(!is_truthy(Some(&json!({}))));
    }

    #[test]
    fn test_render_pending_record() {
        let text = render_display_record(&DisplayRecord::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|line| line.ends_with(": Loading...")));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_render_record_field_order() {
        let record = DisplayRecord {
            status: Some("Running".to_string()),
            docker: Some("Available".to_string()),
            autostart: Some("Enabled".to_string()),
            uptime: Some("5m 2s".to_string()),
            image_updates: Some("0".to_string()),
            last_checked: Some("Mar 4, 2024 13:05 UTC".to_string()),
        };

        assert_eq!(
            render_display_record(&record),
            "Service Status : Running\n\
             Docker Status  : Available\n\
             Auto-start     : Enabled\n\
             Uptime         : 5m 2s\n\
             Image Updates  : 0\n\
             Last Checked   : Mar 4, 2024 13:05 UTC"
        );
    }

    #[test]
    fn test_render_partial_record() {
        let record = DisplayRecord {
            uptime: Some("42s".to_string()),
            ..Default::default()
        };
        let text = render_display_record(&record);
        assert!(text.contains("Uptime         : 42s"));
        assert!(text.contains("Service Status : Loading..."));
    }

    #[test]
    fn test_decode_payload() {
        assert_eq!(
            decode_payload(r#"{"serviceStatus":"running"}"#).unwrap(),
            json!({"serviceStatus": "running"})
        );
    }

    #[test]
    fn test_decode_payload_failure_renders_as_error() {
        let error = decode_payload("<html>502 Bad Gateway</html>").unwrap_err();
        let text = render_error(&ErrorRecord::from_error(&error));
        assert!(text.starts_with("[bold red]Invalid status payload: "));
        assert!(text.ends_with("[/bold red]"));
    }

    #[test]
    fn test_render_error() {
        assert_eq!(
            render_error(&ErrorRecord::new("boom")),
            "[bold red]boom[/bold red]"
        );
    }
}
