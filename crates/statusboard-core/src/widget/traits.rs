//! Polled widget trait definition.

use crate::widget::types::{Responses, WidgetBase, WidgetData};
use std::time::Duration;

/// Capability a dashboard host drives on a timer.
///
/// The host polls every URL in [`endpoints`](Pollable::endpoints) each
/// [`interval`](Pollable::interval), passes the decoded payloads to
/// [`extract_data`](Pollable::extract_data), keeps the returned record, and
/// later asks [`render_content`](Pollable::render_content) for panel text.
/// When a poll fails the host renders an error record instead.
pub trait Pollable: Send + Sync {
    /// Flat record produced by one extraction.
    type Record;

    /// Construction-time data: title, endpoints, credential, extra config.
    fn base(&self) -> &WidgetBase;

    /// How often the host should poll.
    fn interval(&self) -> Duration;

    fn title(&self) -> &str {
        &self.base().title
    }

    fn endpoints(&self) -> &[String] {
        &self.base().endpoints
    }

    /// Turn raw poll results into a display record. Must not fail.
    fn extract_data(&self, responses: &Responses) -> Self::Record;

    /// Panel text for a record or an error.
    fn render_content(&self, data: &WidgetData<Self::Record>) -> String;
}
