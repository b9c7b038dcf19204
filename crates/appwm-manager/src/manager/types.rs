//! Core types and constructors for AppWindowManager.

use appwm_common::{DisplayFlags, EventBus, ShellEvent, WindowId};
use appwm_config::AppWmConfig;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::gate::TransitionGate;
use crate::registry::WindowRegistry;
use crate::shell::ShellServices;
use crate::tracker::ActiveWindowTracker;
use crate::window::WindowRef;

/// Owns the window registry, the active window and any parked switches.
///
/// Single-threaded: every entry point takes `&mut self` and runs to
/// completion. Asynchronous collaborators answer through later
/// [`Notification`](crate::Notification)s fed to [`handle`](Self::handle).
pub struct AppWindowManager {
    pub(super) registry: WindowRegistry,
    pub(super) tracker: ActiveWindowTracker,
    pub(super) gate: TransitionGate,
    pub(super) services: ShellServices,
    pub(super) bus: EventBus,
    /// Last applied configuration.
    pub(super) config: AppWmConfig,
    /// Smooth keyboard dismissal before a switch. Seeded from the config,
    /// then driven by setting changes.
    pub(super) continuous_transition: bool,
}

impl AppWindowManager {
    pub fn new(config: &AppWmConfig, services: ShellServices) -> Self {
        services
            .screen
            .set_slow_transition(config.transitions.slow);
        Self {
            registry: WindowRegistry::new(),
            tracker: ActiveWindowTracker::new(),
            gate: TransitionGate::new(),
            services,
            bus: EventBus::default(),
            config: config.clone(),
            continuous_transition: config.transitions.continuous,
        }
    }

    // -- Accessors --

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn window(&self, id: WindowId) -> Option<WindowRef> {
        self.registry.get(id)
    }

    /// The active window, without any home screen fallback.
    pub fn active(&self) -> Option<WindowRef> {
        self.tracker.active(&self.registry)
    }

    pub fn active_id(&self) -> Option<WindowId> {
        self.tracker.active_id()
    }

    /// The active window, or the home screen when none is active. The home
    /// screen is created on first use.
    pub fn active_window(&mut self) -> Option<WindowRef> {
        self.active().or_else(|| self.homescreen(true))
    }

    pub fn display_flags(&self) -> DisplayFlags {
        self.tracker.flags()
    }

    pub fn config(&self) -> &AppWmConfig {
        &self.config
    }

    pub fn continuous_transition(&self) -> bool {
        self.continuous_transition
    }

    /// Number of switches parked on a precondition.
    pub fn pending_switches(&self) -> usize {
        self.gate.pending_count()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.bus.subscribe()
    }

    /// Whether a window for the app is running. Requires a manifest URL.
    pub fn is_running(&self, origin: &str, manifest_url: Option<&str>) -> bool {
        manifest_url.is_some() && self.registry.find_by_origin(origin, None).is_some()
    }

    // -- Shared helpers --

    /// Promote `id` to active, mirror its flags on the screen and announce
    /// a change. A stale id leaves everything untouched.
    pub(super) fn update_active(&mut self, id: WindowId) -> bool {
        let previous = self.tracker.active_id();
        match self.tracker.set_active(&self.registry, id) {
            Ok(window) => {
                self.services
                    .screen
                    .apply_display_flags(self.tracker.flags());
                tracing::debug!(window = %id, name = %window.name(), "active window updated");
                if previous != Some(id) {
                    self.publish(ShellEvent::ActiveWindowChanged(id));
                }
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "active window not updated");
                false
            }
        }
    }

    /// The home screen, registered with the manager if it was just created.
    pub(super) fn homescreen(&mut self, create: bool) -> Option<WindowRef> {
        let home = self.services.launcher.homescreen(create)?;
        if !self.registry.contains(home.id()) {
            tracing::debug!(window = %home.id(), "adopting home screen");
            self.registry.register(home.clone());
        }
        Some(home)
    }

    pub(super) fn is_home_origin(&self, origin: &str) -> bool {
        self.services.launcher.origin() == origin
    }

    /// Deliver `message` to every registered window and publish it as a
    /// named event.
    pub fn broadcast_message(&self, message: &str, detail: Option<&Value>) {
        let windows: Vec<WindowRef> = self.registry.windows().cloned().collect();
        tracing::debug!(msg = message, count = windows.len(), "broadcasting");
        for window in windows {
            window.broadcast(message, detail);
        }
        self.publish_named(message, detail.cloned().unwrap_or(Value::Null));
    }

    pub(super) fn publish(&self, event: ShellEvent) {
        let receivers = self.bus.publish(event);
        tracing::trace!(receivers, "event published");
    }

    /// Generic named publication with a JSON detail.
    pub fn publish_named(&self, topic: &str, detail: Value) {
        self.publish(ShellEvent::Named {
            topic: topic.to_string(),
            detail,
        });
    }

    /// Deepest window in the child chain of `window`.
    pub fn top_most(&self, window: &WindowRef) -> WindowRef {
        self.registry.leaf_of(window)
    }

    /// Log every top-level window with its child chain and callee.
    pub(super) fn dump(&self) {
        if !self.config.debug.dump_windows {
            return;
        }
        tracing::debug!("window dump begins");
        for window in self.registry.windows() {
            if window.previous_window().is_some() {
                continue;
            }
            for (depth, w) in self.registry.chain_from(window).iter().enumerate() {
                tracing::debug!(
                    window = %w.id(),
                    name = %w.name(),
                    url = %w.url(),
                    child = depth > 0,
                    "window"
                );
                if let Some(callee) = w.callee() {
                    tracing::debug!(window = %w.id(), callee = %callee, "activity");
                }
            }
        }
        tracing::debug!("window dump ends");
    }
}
