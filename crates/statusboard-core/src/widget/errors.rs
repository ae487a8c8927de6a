use crate::errors::StatusboardError;

#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("Invalid status payload: {source}")]
    InvalidPayload {
        #[from]
        source: serde_json::Error,
    },
}

impl StatusboardError for WidgetError {
    fn error_code(&self) -> &'static str {
        match self {
            WidgetError::InvalidPayload { .. } => "WIDGET_INVALID_PAYLOAD",
        }
    }
}
