use std::path::PathBuf;

use crate::id::WindowId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Non-fatal window management failures.
///
/// None of these ever reach the caller of a manager operation; they are
/// logged at the boundary and the previous state is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("no window registered for {0}")]
    LookupMiss(String),

    #[error("{0} is not registered, active window left unchanged")]
    StaleActiveReference(WindowId),

    #[error("{0} died before it could be opened")]
    DeadTargetOnOpen(WindowId),

    #[error("window chain revisits {0}")]
    ChainCycle(WindowId),

    #[error("home screen is not available")]
    NoHomescreen,
}

#[derive(Debug, thiserror::Error)]
pub enum AppWmError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
