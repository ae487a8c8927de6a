//! Default values for configuration types.

use crate::config::types::WidgetConfig;
use crate::widget::ApiPassword;

/// Title used when no config layer sets one.
pub const DEFAULT_TITLE: &str = "Status";

/// Name of the per-user and per-project config directory.
pub const CONFIG_DIR_NAME: &str = ".statusboard";

/// Name of the config file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

impl WidgetConfig {
    /// Title with the default applied.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Credential with the default (empty) applied.
    pub fn api_password(&self) -> ApiPassword {
        self.api_password.clone().unwrap_or_default()
    }
}
