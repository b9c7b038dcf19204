//! Inert collaborators.
//!
//! Used when the embedding shell has no such component, or for testing.

use appwm_common::{DisplayFlags, Size};

use super::{Dismissal, Keyboard, Layout, LockScreen, MediaRecording, Screen, SearchOverlay};
use crate::gate::StopRequestId;

/// A keyboard that is never shown.
#[derive(Debug)]
pub struct NoopKeyboard;

impl Keyboard for NoopKeyboard {
    fn is_engaged(&self) -> bool {
        false
    }

    fn hide(&self, _dismissal: Dismissal) {}
}

#[derive(Debug)]
pub struct NoopOverlay;

impl SearchOverlay for NoopOverlay {
    fn is_active(&self) -> bool {
        false
    }
}

#[derive(Debug)]
pub struct NoopRecording;

impl MediaRecording for NoopRecording {
    fn is_recording(&self) -> bool {
        false
    }

    fn request_stop(&self, _request: StopRequestId) {}

    fn clear_stop_request(&self) {}
}

/// Accepts every size, so no switch is forced to be immediate by layout.
#[derive(Debug)]
pub struct AnyLayout;

impl Layout for AnyLayout {
    fn matches(&self, _size: Size) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct NoopScreen;

impl Screen for NoopScreen {
    fn exit_fullscreen(&self) {}

    fn apply_display_flags(&self, _flags: DisplayFlags) {}

    fn set_slow_transition(&self, _slow: bool) {}
}

#[derive(Debug)]
pub struct NoopLock;

impl LockScreen for NoopLock {
    fn is_locked(&self) -> bool {
        false
    }
}
