//! File watcher for live config reload.
//!
//! Watches the config file's directory with `notify` and coalesces bursts of
//! events (editors save with write + rename) into one signal.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEBOUNCE};
