//! Runtime setting keys observed by the window manager.

use serde_json::Value;
use tracing::debug;

use crate::schema::AppWmConfig;

pub const CONTINUOUS_TRANSITION_KEY: &str = "continuous-transition.enabled";
pub const APP_SUSPENDING_KEY: &str = "app-suspending.enabled";

/// A change to one of the settings the window manager reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    ContinuousTransition(bool),
    AppSuspending(bool),
}

impl SettingChange {
    /// Interpret a raw settings-store value.
    ///
    /// Unknown keys, `null` and non-boolean values yield `None`.
    pub fn parse(key: &str, value: &Value) -> Option<Self> {
        let Some(enabled) = value.as_bool() else {
            debug!(key, %value, "ignoring non-boolean setting value");
            return None;
        };
        match key {
            CONTINUOUS_TRANSITION_KEY => Some(SettingChange::ContinuousTransition(enabled)),
            APP_SUSPENDING_KEY => Some(SettingChange::AppSuspending(enabled)),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SettingChange::ContinuousTransition(_) => CONTINUOUS_TRANSITION_KEY,
            SettingChange::AppSuspending(_) => APP_SUSPENDING_KEY,
        }
    }

    /// Changes needed to move a running manager from `old` to `new`.
    pub fn between(old: &AppWmConfig, new: &AppWmConfig) -> Vec<SettingChange> {
        let mut changes = Vec::new();
        if old.transitions.continuous != new.transitions.continuous {
            changes.push(SettingChange::ContinuousTransition(
                new.transitions.continuous,
            ));
        }
        if old.suspending.enabled != new.suspending.enabled {
            changes.push(SettingChange::AppSuspending(new.suspending.enabled));
        }
        changes
    }
}
