pub mod errors;
pub mod operations;
pub mod status;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use errors::WidgetError;
pub use operations::decode_payload;
pub use status::StatusWidget;
pub use traits::Pollable;
pub use types::{ApiPassword, DisplayRecord, ErrorRecord, Responses, WidgetBase, WidgetData};
