//! TransitionGate: asynchronous preconditions a switch waits on.
//!
//! A switch that cannot proceed yet is parked together with the condition
//! it waits for. The matching notification releases it exactly once. Parked
//! switches keep the windows captured at request time and never re-read the
//! tracker, so a later request does not rewrite an earlier one.

use std::fmt;

use appwm_common::{Transition, WindowId};

use crate::window::WindowRef;

/// Correlates a stop-recording request with its acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopRequestId(pub u64);

impl fmt::Display for StopRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop-{}", self.0)
    }
}

/// What a parked switch is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitFor {
    KeyboardHidden,
    OverlayClosed,
    RecordingStopped(StopRequestId),
    WindowReady(WindowId),
}

/// A display request captured at the moment it was made.
#[derive(Debug, Clone)]
pub struct PendingSwitch {
    pub current: Option<WindowRef>,
    pub next: WindowRef,
    pub app_to_app: bool,
    pub open: Option<Transition>,
    pub close: Option<Transition>,
    /// Log correlation id of the originating request.
    pub correlation: String,
}

/// The precondition that applies to a request. Exactly one is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    HideKeyboard,
    CloseOverlay,
    StopRecording,
    None,
}

impl Precondition {
    /// Keyboard first, then overlay, then recording.
    pub fn choose(keyboard: bool, overlay: bool, recording: bool) -> Self {
        if keyboard {
            Precondition::HideKeyboard
        } else if overlay {
            Precondition::CloseOverlay
        } else if recording {
            Precondition::StopRecording
        } else {
            Precondition::None
        }
    }
}

/// How the keyboard should leave the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    Animated,
    Immediate,
}

impl Dismissal {
    pub fn for_continuous(continuous: bool) -> Self {
        if continuous {
            Dismissal::Animated
        } else {
            Dismissal::Immediate
        }
    }
}

#[derive(Debug, Default)]
pub struct TransitionGate {
    parked: Vec<(WaitFor, PendingSwitch)>,
    next_stop_request: u64,
}

impl TransitionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn park(&mut self, wait: WaitFor, switch: PendingSwitch) {
        tracing::debug!(?wait, window = %switch.next.id(), "switch parked");
        self.parked.push((wait, switch));
    }

    /// Remove and return every switch waiting on `wait`, oldest first.
    pub fn release(&mut self, wait: &WaitFor) -> Vec<PendingSwitch> {
        let (released, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.parked)
            .into_iter()
            .partition(|(w, _)| w == wait);
        self.parked = kept;
        released.into_iter().map(|(_, switch)| switch).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.parked.len()
    }

    pub fn is_waiting_on(&self, wait: &WaitFor) -> bool {
        self.parked.iter().any(|(w, _)| w == wait)
    }

    /// Allocate an id for a new stop-recording request.
    pub fn next_stop_request(&mut self) -> StopRequestId {
        self.next_stop_request += 1;
        StopRequestId(self.next_stop_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Journal, MockWindow};
    use crate::window::WindowKind;

    fn switch_to(id: u64, j: &Journal) -> PendingSwitch {
        PendingSwitch {
            current: None,
            next: MockWindow::new(WindowId(id), WindowKind::App, "app://a", j).handle(),
            app_to_app: false,
            open: None,
            close: None,
            correlation: format!("c{id}"),
        }
    }

    #[test]
    fn precondition_priority() {
        assert_eq!(Precondition::choose(true, true, true), Precondition::HideKeyboard);
        assert_eq!(Precondition::choose(false, true, true), Precondition::CloseOverlay);
        assert_eq!(Precondition::choose(false, false, true), Precondition::StopRecording);
        assert_eq!(Precondition::choose(false, false, false), Precondition::None);
    }

    #[test]
    fn dismissal_follows_continuous_mode() {
        assert_eq!(Dismissal::for_continuous(true), Dismissal::Animated);
        assert_eq!(Dismissal::for_continuous(false), Dismissal::Immediate);
    }

    #[test]
    fn release_is_one_shot_and_ordered() {
        let j = Journal::default();
        let mut gate = TransitionGate::new();
        gate.park(WaitFor::KeyboardHidden, switch_to(1, &j));
        gate.park(WaitFor::OverlayClosed, switch_to(2, &j));
        gate.park(WaitFor::KeyboardHidden, switch_to(3, &j));
        assert_eq!(gate.pending_count(), 3);

        let released: Vec<_> = gate
            .release(&WaitFor::KeyboardHidden)
            .iter()
            .map(|s| s.next.id())
            .collect();
        assert_eq!(released, vec![WindowId(1), WindowId(3)]);
        assert!(gate.release(&WaitFor::KeyboardHidden).is_empty());
        assert!(gate.is_waiting_on(&WaitFor::OverlayClosed));
        assert_eq!(gate.pending_count(), 1);
    }

    #[test]
    fn recording_waits_match_by_request() {
        let j = Journal::default();
        let mut gate = TransitionGate::new();
        let first = gate.next_stop_request();
        let second = gate.next_stop_request();
        assert_ne!(first, second);
        gate.park(WaitFor::RecordingStopped(first), switch_to(1, &j));

        assert!(gate.release(&WaitFor::RecordingStopped(second)).is_empty());
        assert_eq!(gate.release(&WaitFor::RecordingStopped(first)).len(), 1);
    }

    #[test]
    fn stop_request_display() {
        assert_eq!(StopRequestId(4).to_string(), "stop-4");
    }
}
