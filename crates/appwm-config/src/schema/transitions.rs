//! Switch transition and suspension settings.

use serde::{Deserialize, Serialize};

/// How window switches animate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Dismiss the keyboard with its own animation before a switch instead
    /// of hiding it at once.
    pub continuous: bool,
    /// Slow down every window transition (debugging aid).
    pub slow: bool,
}

/// Background app suspension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuspendingConfig {
    /// When turned off, suspended windows are told to kill themselves.
    pub enabled: bool,
}
