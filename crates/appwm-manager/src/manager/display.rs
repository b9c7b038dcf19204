//! Switch orchestration: display requests, the gate and the final
//! open/close.

use appwm_common::{new_correlation_id, Rotation, Transition, WindowError};

use crate::gate::{Dismissal, PendingSwitch, Precondition, StopRequestId, WaitFor};
use crate::shell::Layout;
use crate::window::{Readiness, WindowRef};

use super::AppWindowManager;

impl AppWindowManager {
    /// Show `target`, or the home screen when `None`.
    ///
    /// The target's deepest child is what actually gets shown. The target
    /// becomes active at once; the open/close runs after whichever
    /// precondition applies has completed.
    pub fn request_display(
        &mut self,
        target: Option<WindowRef>,
        open: Option<Transition>,
        close: Option<Transition>,
    ) {
        self.dump();
        let current = self.active();
        let Some(next) = target.or_else(|| self.homescreen(true)) else {
            tracing::debug!("nothing to display");
            return;
        };
        let next = self.registry.leaf_of(&next);

        if current.as_ref().is_some_and(|c| c.id() == next.id()) {
            tracing::debug!(window = %next.id(), "already displayed");
            return;
        }
        if !self.registry.contains(next.id()) {
            tracing::warn!(error = %WindowError::StaleActiveReference(next.id()), "display refused");
            return;
        }

        self.services.screen.exit_fullscreen();
        self.tracker.clear_fullscreen();
        self.services
            .screen
            .apply_display_flags(self.tracker.flags());

        let app_to_app =
            current.as_ref().is_some_and(|c| !c.is_homescreen()) && !next.is_homescreen();
        if !self.update_active(next.id()) {
            return;
        }

        let switch = PendingSwitch {
            current,
            next,
            app_to_app,
            open,
            close,
            correlation: new_correlation_id(),
        };
        let span = tracing::debug_span!("switch", cid = %switch.correlation);
        let _enter = span.enter();
        tracing::debug!(
            current = ?switch.current.as_ref().map(|w| w.id()),
            next = %switch.next.id(),
            app_to_app,
            "display requested"
        );
        self.run_gate(switch);
    }

    /// Shorthand for [`request_display`](Self::request_display) without
    /// explicit transitions.
    pub fn display(&mut self, target: Option<WindowRef>) {
        self.request_display(target, None, None);
    }

    fn run_gate(&mut self, switch: PendingSwitch) {
        let keyboard = switch
            .current
            .as_ref()
            .is_some_and(|c| !c.is_homescreen())
            && self.services.keyboard.is_engaged();
        let overlay = self.services.overlay.is_active();
        let recording = self.services.recording.is_recording();

        match Precondition::choose(keyboard, overlay, recording) {
            Precondition::HideKeyboard => {
                if recording {
                    // Not awaited; the keyboard decides when we go on.
                    let request = self.gate.next_stop_request();
                    self.services.recording.request_stop(request);
                }
                self.gate.park(WaitFor::KeyboardHidden, switch);
                self.services
                    .keyboard
                    .hide(Dismissal::for_continuous(self.continuous_transition));
            }
            Precondition::CloseOverlay => {
                self.gate.park(WaitFor::OverlayClosed, switch);
            }
            Precondition::StopRecording => {
                let request = self.gate.next_stop_request();
                self.gate.park(WaitFor::RecordingStopped(request), switch);
                self.services.recording.request_stop(request);
            }
            Precondition::None => self.await_ready(switch),
        }
    }

    fn await_ready(&mut self, switch: PendingSwitch) {
        match switch.next.ready() {
            Readiness::Ready => self.complete_switch(switch),
            Readiness::Pending => {
                let id = switch.next.id();
                self.gate.park(WaitFor::WindowReady(id), switch);
            }
        }
    }

    /// Release every switch parked on `wait` and carry each one forward.
    pub(super) fn resume(&mut self, wait: WaitFor) {
        if !self.gate.is_waiting_on(&wait) {
            tracing::debug!(?wait, "no switch waiting");
            return;
        }
        for switch in self.gate.release(&wait) {
            let span = tracing::debug_span!("switch", cid = %switch.correlation);
            let _enter = span.enter();
            match wait {
                WaitFor::WindowReady(_) => self.complete_switch(switch),
                _ => self.await_ready(switch),
            }
        }
    }

    pub(super) fn on_stop_recording_ack(&mut self, request: StopRequestId, success: bool) {
        if success {
            self.services.recording.clear_stop_request();
        } else {
            tracing::debug!(%request, "stop recording failed, switching anyway");
        }
        self.resume(WaitFor::RecordingStopped(request));
    }

    fn complete_switch(&mut self, switch: PendingSwitch) {
        let PendingSwitch {
            current,
            mut next,
            app_to_app,
            open,
            close,
            ..
        } = switch;

        if next.is_dead() {
            if !next.is_homescreen() {
                tracing::warn!(error = %WindowError::DeadTargetOnOpen(next.id()), "switch cancelled");
                self.restore_active(current.as_ref());
                return;
            }
            let Some(home) = self.homescreen(true) else {
                tracing::warn!(error = %WindowError::NoHomescreen, "switch cancelled");
                self.restore_active(current.as_ref());
                return;
            };
            home.ensure();
            next = home;
        }

        if !self.update_active(next.id()) {
            tracing::warn!(window = %next.id(), "switch cancelled, target left the registry");
            self.restore_active(current.as_ref());
            return;
        }

        if app_to_app {
            if let Some(home) = self.services.launcher.homescreen(false) {
                home.fade_out();
            }
        }

        let immediate =
            needs_immediate_transition(current.as_ref(), &next, &*self.services.layout);
        let (open, close) = pick_transitions(immediate, app_to_app, open, close);
        tracing::debug!(window = %next.id(), immediate, "opening");

        next.open(open);
        match current {
            Some(current) if current.id() != next.id() => current.close(close),
            _ => tracing::debug!("no outgoing window"),
        }
    }

    /// Put the outgoing window back in charge after a cancelled switch.
    fn restore_active(&mut self, previous: Option<&WindowRef>) {
        let restored = match previous {
            Some(window) => self.update_active(window.id()),
            None => false,
        };
        if !restored {
            self.tracker.clear();
            self.services
                .screen
                .apply_display_flags(self.tracker.flags());
        }
    }
}

/// A switch skips animation when a rotation is involved, when the home
/// screen appears with nothing before it, or when the target was sized for
/// another layout.
fn needs_immediate_transition(
    current: Option<&WindowRef>,
    next: &WindowRef,
    layout: &dyn Layout,
) -> bool {
    let quarter = |rotation: Option<Rotation>| rotation.is_some_and(Rotation::is_quarter_turn);

    let rotation = quarter(next.rotating_degree())
        || match current {
            Some(current) => quarter(current.closing_rotation_degree()),
            None => next.is_homescreen(),
        };
    let stale_size = next.last_size().is_some_and(|size| !layout.matches(size));
    rotation || stale_size
}

/// Open and close transitions for a switch.
fn pick_transitions(
    immediate: bool,
    app_to_app: bool,
    open: Option<Transition>,
    close: Option<Transition>,
) -> (Option<Transition>, Option<Transition>) {
    if immediate {
        (Some(Transition::Immediate), Some(Transition::Immediate))
    } else if app_to_app {
        (
            open.or(Some(Transition::Invoked)),
            close.or(Some(Transition::Invoking)),
        )
    } else {
        (open, close)
    }
}
