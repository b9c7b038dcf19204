//! Window switching core of a mobile shell.
//!
//! Decides which single application window is in the foreground and
//! orchestrates the switch from the current window to a requested one,
//! waiting on the keyboard, the search overlay, media recording and the
//! target's own readiness when needed.

pub mod gate;
pub mod manager;
pub mod notification;
pub mod registry;
pub mod shell;
pub mod tracker;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use gate::{StopRequestId, TransitionGate};
pub use manager::AppWindowManager;
pub use notification::{LaunchConfig, Notification, ShowWindowDetail};
pub use registry::WindowRegistry;
pub use shell::ShellServices;
pub use tracker::ActiveWindowTracker;
pub use window::{AppWindow, Readiness, WindowKind, WindowRef};
