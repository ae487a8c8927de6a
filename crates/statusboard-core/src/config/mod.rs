//! # Configuration System
//!
//! Hierarchical TOML configuration for statusboard widgets.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.statusboard/config.toml` (global user preferences)
//! 3. **Project config** - `./.statusboard/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.statusboard/config.toml
//! [widget]
//! title = "Media Server"
//! api_base = "http://localhost:3000"
//! api_password = "secret"
//!
//! [widget.extra]
//! border = "rounded"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use statusboard_core::config::StatusboardConfig;
//! use statusboard_core::StatusWidget;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StatusboardConfig::load_hierarchy()?;
//!     let widget = StatusWidget::from_config(&config.widget)?;
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{StatusboardConfig, WidgetConfig};
pub use validation::{validate_api_base, validate_config};

impl StatusboardConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
