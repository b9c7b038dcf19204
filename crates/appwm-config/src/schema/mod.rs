//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod system;
mod transitions;

pub use system::*;
pub use transitions::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the window manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppWmConfig {
    pub transitions: TransitionConfig,
    pub suspending: SuspendingConfig,
    pub logging: LoggingConfig,
    pub debug: DebugConfig,
}
