//! Notification dispatch for AppWindowManager.

use appwm_config::{AppWmConfig, SettingChange};
use tokio::sync::watch;

use crate::gate::WaitFor;
use crate::notification::Notification;
use crate::window::WindowRef;

use super::AppWindowManager;

impl AppWindowManager {
    /// React to one notification. Never fails; problems are logged.
    pub fn handle(&mut self, notification: Notification) {
        tracing::debug!(kind = notification.kind(), "handling notification");
        let active = self.active();

        match notification {
            Notification::AppCreated(window) | Notification::HomescreenCreated(window) => {
                tracing::debug!(window = %window.id(), origin = %window.origin(), "window created");
                self.registry.register(window);
            }
            Notification::AppTerminated(window) => self.on_terminated(&window),
            Notification::AppOpening(window)
            | Notification::AppOpened(window)
            | Notification::HomescreenOpened(window) => {
                self.update_active(window.id());
            }

            Notification::LaunchApp(config) => self.launch(&config),
            Notification::KillApp {
                origin,
                manifest_url,
            } => self.kill(&origin, manifest_url.as_deref()),
            Notification::ApplicationUninstalled { origin } => self.kill(&origin, None),
            Notification::DisplayApp(window) | Notification::AppRequestOpen(window) => {
                self.display(Some(window));
            }
            Notification::AppRequestClose(window) => {
                if self.tracker.is_active(window.id()) {
                    self.display(None);
                }
            }
            Notification::HomePressed => self.on_home_pressed(active),
            Notification::HomescreenChanged => self.display(None),
            Notification::FtuSkip => self.on_ftu_skip(),
            Notification::ShowWindow(detail) => self.show_window(detail.unwrap_or_default()),
            Notification::LaunchActivity {
                detail,
                is_activity,
                inline,
            } => {
                // The opener is unknown; the active window takes it.
                if let (true, Some(active)) = (is_activity && inline, active) {
                    active.broadcast("launchactivity", Some(&detail));
                }
            }

            Notification::AttentionOpened => {
                if let Some(active) = active {
                    if active.is_oop() {
                        active.blur();
                    } else {
                        active.set_visible(false, true);
                    }
                }
            }
            Notification::SystemResize => {
                if let Some(active) = active {
                    if active.is_transitioning() {
                        tracing::debug!(window = %active.id(), "resize skipped, transitioning");
                    } else {
                        active.resize();
                    }
                }
            }
            Notification::OrientationChange => self.broadcast_message("orientationchange", None),
            Notification::ResetOrientation => {
                if let Some(active) = active {
                    active.set_orientation();
                }
            }
            Notification::PermissionDialogHidden => {
                if let Some(active) = active {
                    active.broadcast("focus", None);
                }
            }
            Notification::HomeGesture(enabled) => {
                let message = if enabled {
                    "homegesture-enabled"
                } else {
                    "homegesture-disabled"
                };
                self.broadcast_message(message, None);
            }
            Notification::HideWindow(detail) => {
                if let Some(active) = active {
                    active.broadcast("hidewindow", detail.as_ref());
                }
            }
            Notification::ScreenReaderVisibility(visible) => {
                if let Some(active) = active {
                    active.set_visible_for_screen_reader(visible);
                }
            }
            Notification::CardViewBeforeShow => {
                if let Some(active) = active {
                    self.top_most(&active).blur();
                }
            }
            Notification::SheetsTransitionStart => {
                self.services.screen.exit_fullscreen();
                if let Some(active) = active {
                    self.top_most(&active)
                        .broadcast("sheetstransitionstart", None);
                }
            }
            Notification::InputMethodContextChange(detail) => {
                if let Some(active) = active {
                    self.top_most(&active)
                        .broadcast("inputmethod-contextchange", Some(&detail));
                }
            }
            Notification::Localized => self.broadcast_message("localized", None),

            Notification::KeyboardHidden => self.resume(WaitFor::KeyboardHidden),
            Notification::OverlayClosed => self.resume(WaitFor::OverlayClosed),
            Notification::StopRecordingAck { request, success } => {
                self.on_stop_recording_ack(request, success);
            }
            Notification::WindowReady(id) => self.resume(WaitFor::WindowReady(id)),

            Notification::SettingChanged(change) => self.apply_setting(change),
        }
    }

    fn on_terminated(&mut self, window: &WindowRef) {
        let id = window.id();
        if self.tracker.clear_if(id) {
            self.services
                .screen
                .apply_display_flags(self.tracker.flags());
            tracing::debug!(window = %id, "active window terminated");
        }
        if self.registry.unregister(id).is_none() {
            tracing::debug!(window = %id, "terminated window was not registered");
        }
    }

    fn on_home_pressed(&mut self, active: Option<WindowRef>) {
        if !self.services.launcher.is_ready() {
            tracing::debug!("home pressed before the home screen is ready");
            return;
        }
        match active {
            Some(active) if !active.is_homescreen() => {
                tracing::debug!("back to home");
                self.display(None);
            }
            _ => {
                if let Some(home) = self.homescreen(true) {
                    home.ensure();
                }
            }
        }
    }

    fn on_ftu_skip(&mut self) {
        if !self.services.lock.is_locked() {
            self.display(None);
        } else if let Some(home) = self.homescreen(false) {
            home.set_visible(false, false);
        }
    }

    /// Apply one runtime setting change.
    pub fn apply_setting(&mut self, change: SettingChange) {
        tracing::info!(key = change.key(), ?change, "setting changed");
        match change {
            SettingChange::ContinuousTransition(enabled) => {
                self.continuous_transition = enabled;
            }
            SettingChange::AppSuspending(enabled) => {
                if !enabled {
                    self.broadcast_message("kill_suspended", None);
                }
            }
        }
    }

    /// Bring a running manager in line with a reloaded config.
    pub fn reconfigure(&mut self, new: AppWmConfig) {
        let old = std::mem::replace(&mut self.config, new);
        for change in SettingChange::between(&old, &self.config) {
            self.apply_setting(change);
        }
        if old.transitions.slow != self.config.transitions.slow {
            self.services
                .screen
                .set_slow_transition(self.config.transitions.slow);
        }
    }

    /// Apply the latest value from a reload channel, if there is a new one.
    pub fn sync_config(&mut self, updates: &mut watch::Receiver<AppWmConfig>) -> bool {
        match updates.has_changed() {
            Ok(true) => {
                let new = updates.borrow_and_update().clone();
                self.reconfigure(new);
                true
            }
            Ok(false) => false,
            Err(_) => {
                tracing::debug!("config channel closed");
                false
            }
        }
    }
}
