//! Logging and debug settings.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Full `tracing` filter directive; overrides `level` when set.
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Filter directive for `appwm_common::logging::init`.
    pub fn directive(&self) -> String {
        match &self.filter {
            Some(filter) => filter.clone(),
            None => format!("appwm={}", self.level.as_filter()),
        }
    }
}

/// Developer options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log every window chain before each display decision.
    pub dump_windows: bool,
}
