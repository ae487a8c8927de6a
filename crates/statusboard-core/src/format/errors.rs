use crate::errors::StatusboardError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("Timestamp is empty")]
    Empty,

    #[error("Unrecognized timestamp '{input}'")]
    Unparsable { input: String },
}

impl StatusboardError for TimestampError {
    fn error_code(&self) -> &'static str {
        match self {
            TimestampError::Empty => "TIMESTAMP_EMPTY",
            TimestampError::Unparsable { .. } => "TIMESTAMP_UNPARSABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
