//! Live config reload.
//!
//! Combines the file watcher with config loading and publishes every
//! successfully reloaded config.

mod manager;


pub use manager::ReloadManager;
