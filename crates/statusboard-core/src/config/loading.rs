//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.statusboard/config.toml` (global user preferences)
//! 3. **Project config** - `./.statusboard/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::config::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::config::types::{StatusboardConfig, WidgetConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.statusboard/config.toml`)
/// 3. Project config (`./.statusboard/config.toml`)
///
/// # Errors
///
/// Returns an error if a file cannot be parsed or validation fails.
/// Missing config files are not errors.
pub fn load_hierarchy() -> Result<StatusboardConfig, ConfigError> {
    let project_path = std::env::current_dir()?
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME);
    load_hierarchy_from(user_config_path().as_deref(), &project_path)
}

/// Load and merge the given user and project config files.
pub fn load_hierarchy_from(
    user_path: Option<&Path>,
    project_path: &Path,
) -> Result<StatusboardConfig, ConfigError> {
    let mut config = StatusboardConfig::default();

    let layers = user_path.into_iter().chain(std::iter::once(project_path));
    for path in layers {
        match load_config_file(path) {
            Ok(layer) => config = merge_configs(config, layer),
            Err(ConfigError::ConfigNotFound { .. }) => {
                debug!(event = "core.config.file_absent", path = %path.display());
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Path of the user config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<StatusboardConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("{}: {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields are replaced only when the override sets them. `extra`
/// tables are merged key by key.
pub fn merge_configs(
    base: StatusboardConfig,
    override_config: StatusboardConfig,
) -> StatusboardConfig {
    StatusboardConfig {
        widget: merge_widget_configs(base.widget, override_config.widget),
    }
}

fn merge_widget_configs(base: WidgetConfig, override_config: WidgetConfig) -> WidgetConfig {
    WidgetConfig {
        title: override_config.title.or(base.title),
        api_base: override_config.api_base.or(base.api_base),
        api_password: override_config.api_password.or(base.api_password),
        extra: {
            let mut merged = base.extra;
            for (key, value) in override_config.extra {
                merged.insert(key, value);
            }
            merged
        },
    }
}
