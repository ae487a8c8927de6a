//! Service status panel polled from `/api/status`.

use crate::config::{WidgetConfig, validate_api_base};
use crate::errors::ConfigError;
use crate::widget::operations;
use crate::widget::traits::Pollable;
use crate::widget::types::{ApiPassword, DisplayRecord, Responses, WidgetBase, WidgetData};
use chrono::Utc;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Polls `{api_base}/api/status` every 10 seconds and shows service state,
/// docker availability, auto-start, uptime and pending image updates.
#[derive(Debug, Clone)]
pub struct StatusWidget {
    base: WidgetBase,
}

impl StatusWidget {
    /// Fixed polling interval.
    pub const INTERVAL: Duration = Duration::from_secs(10);

    /// Path polled relative to the API base URL.
    pub const STATUS_PATH: &'static str = "/api/status";

    pub fn new(
        title: impl Into<String>,
        api_base: &str,
        api_password: impl Into<ApiPassword>,
        extra: Map<String, Value>,
    ) -> Self {
        let endpoint = format!("{}{}", api_base.trim_end_matches('/'), Self::STATUS_PATH);
        Self {
            base: WidgetBase::new(title, vec![endpoint], api_password.into(), extra),
        }
    }

    /// Build from loaded configuration.
    ///
    /// Fails when `api_base` is unset or is not an http(s) URL.
    pub fn from_config(config: &WidgetConfig) -> Result<Self, ConfigError> {
        let api_base = config
            .api_base
            .as_deref()
            .filter(|base| !base.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "api_base",
                flag: "api-base",
            })?;
        validate_api_base(api_base)?;

        Ok(Self::new(
            config.title(),
            api_base,
            config.api_password(),
            config.extra.clone(),
        ))
    }

    /// The single endpoint this widget declares.
    pub fn status_endpoint(&self) -> &str {
        &self.base.endpoints[0]
    }
}

impl Pollable for StatusWidget {
    type Record = DisplayRecord;

    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn interval(&self) -> Duration {
        Self::INTERVAL
    }

    fn extract_data(&self, responses: &Responses) -> DisplayRecord {
        let endpoint = self.status_endpoint();
        debug!(event = "core.widget.extract_started", endpoint = endpoint);

        let empty = Value::Object(Map::new());
        let payload = match responses.get(endpoint) {
            Some(payload) => payload,
            None => {
                warn!(
                    event = "core.widget.payload_missing",
                    endpoint = endpoint,
                    received = responses.len()
                );
                &empty
            }
        };

        let record = operations::extract_display_record(payload, Utc::now());

        debug!(
            event = "core.widget.extract_completed",
            endpoint = endpoint,
            status = record.status.as_deref(),
            image_updates = record.image_updates.as_deref()
        );

        record
    }

    fn render_content(&self, data: &WidgetData<DisplayRecord>) -> String {
        match data {
            WidgetData::Error(error) => {
                debug!(event = "core.widget.render_error", title = %self.base.title);
                operations::render_error(error)
            }
            WidgetData::Record(record) => operations::render_display_record(record),
        }
    }
}
