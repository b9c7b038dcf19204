//! The AppWindowManager owns the registry, the active window and the
//! transition gate, and turns notifications into window switches.

mod display;
mod launch;
mod routing;
mod show_window;
mod types;

pub use types::*;
