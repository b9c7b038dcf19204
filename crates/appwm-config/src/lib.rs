//! Window manager configuration.
//!
//! TOML file with serde defaults for every section, validation, runtime
//! setting keys and live reload. Partial files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use appwm_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod reload;
pub mod schema;
pub mod settings;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{AppWmConfig, CONFIG_SCHEMA_VERSION};
pub use settings::SettingChange;
pub use watcher::ConfigWatcher;

use appwm_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<AppWmConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &AppWmConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
