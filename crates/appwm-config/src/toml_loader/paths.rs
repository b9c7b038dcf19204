//! Config path resolution and default file creation.

use appwm_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const CONFIG_DIR_NAME: &str = "appwm";
const CONFIG_FILE_NAME: &str = "config.toml";

/// `<config_dir>/appwm/config.toml` for the current platform.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!("cannot write {}: {e}", path.display()))
    })?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
