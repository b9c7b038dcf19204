//! Full configuration validation.
//!
//! Collects every problem into a single `ConfigError`.

mod helpers;


use crate::schema::AppWmConfig;
use appwm_common::ConfigError;

use helpers::validate_directive;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AppWmConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Some(filter) = &config.logging.filter {
        validate_directive(&mut errors, "logging.filter", filter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
