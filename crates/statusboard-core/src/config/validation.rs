//! Configuration validation.

use crate::config::types::StatusboardConfig;
use crate::errors::ConfigError;

/// URL schemes an `api_base` may use.
pub const VALID_SCHEMES: &[&str] = &["http://", "https://"];

/// Validate a merged configuration.
///
/// `api_base` may be absent here (it can still come from the CLI), but when
/// present it must be an http(s) URL.
pub fn validate_config(config: &StatusboardConfig) -> Result<(), ConfigError> {
    if let Some(api_base) = &config.widget.api_base {
        validate_api_base(api_base)?;
    }
    Ok(())
}

/// Check that `api_base` is an http(s) URL with a host part.
pub fn validate_api_base(api_base: &str) -> Result<(), ConfigError> {
    let has_host = VALID_SCHEMES.iter().any(|scheme| {
        api_base
            .strip_prefix(scheme)
            .is_some_and(|rest| !rest.trim_matches('/').is_empty())
    });

    if has_host {
        Ok(())
    } else {
        Err(ConfigError::InvalidApiBase {
            api_base: api_base.to_string(),
        })
    }
}
