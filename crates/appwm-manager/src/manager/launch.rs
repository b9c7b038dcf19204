//! Launch, kill and activity linkage.

use appwm_common::WindowError;

use crate::notification::LaunchConfig;

use super::AppWindowManager;

impl AppWindowManager {
    /// Bring the app described by `config` forward, unless it should stay in
    /// the background.
    pub fn launch(&mut self, config: &LaunchConfig) {
        tracing::debug!(origin = %config.origin, "launching");
        if config.change_url {
            // With several instances of one origin the first one navigates.
            if let Some(window) = self.registry.find_by_origin(&config.origin, None) {
                window.modify_url_at_background(&config.url);
            }
        }
        if config.stay_background {
            return;
        }
        // Linked before display so observers never see an unlinked callee.
        if config.is_activity && self.active().is_some() {
            self.link_activity(&config.origin);
        }
        if self.is_home_origin(&config.origin) {
            self.display(None);
        } else {
            let target = self.registry.find_by_origin(&config.origin, None);
            if target.is_none() {
                let miss = WindowError::LookupMiss(config.origin.clone());
                tracing::debug!(error = %miss, "falling back to the home screen");
            }
            self.display(target);
        }
    }

    /// Mark the window of `origin` as invoked by the active window's
    /// top-most window.
    fn link_activity(&mut self, origin: &str) {
        let Some(active) = self.active() else {
            return;
        };
        let Some(callee) = self.registry.find_by_origin(origin, None) else {
            let miss = WindowError::LookupMiss(origin.to_string());
            tracing::warn!(error = %miss, "activity not linked");
            return;
        };
        let caller = self.top_most(&active);
        callee.set_caller(Some(caller.id()));
        caller.set_callee(Some(callee.id()));
        tracing::debug!(caller = %caller.id(), callee = %callee.id(), "activity linked");
    }

    /// Ask every window of `origin` to terminate itself. Entries leave the
    /// registry only when each window reports back as terminated.
    pub fn kill(&mut self, origin: &str, manifest_url: Option<&str>) {
        let targets = self.registry.all_with_origin(origin, manifest_url);
        tracing::debug!(origin, count = targets.len(), "killing");
        for window in targets {
            window.kill();
        }
    }
}
