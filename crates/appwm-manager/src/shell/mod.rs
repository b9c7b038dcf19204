//! Shell collaborators the manager drives but does not own.
//!
//! Each seam is a small trait so the manager can be wired to the real shell
//! or to stand-ins. [`ShellServices`] bundles them; anything not supplied
//! falls back to the inert implementations in [`noop`].

use std::fmt;
use std::rc::Rc;

use appwm_common::{DisplayFlags, Size};

use crate::gate::StopRequestId;
use crate::window::WindowRef;

pub mod noop;

pub use crate::gate::Dismissal;

/// Owner of the home screen window.
pub trait HomescreenLauncher: fmt::Debug {
    fn origin(&self) -> String;
    fn is_ready(&self) -> bool;
    /// The home screen window. With `create`, a missing one is created.
    fn homescreen(&self, create: bool) -> Option<WindowRef>;
}

pub trait Keyboard: fmt::Debug {
    fn is_engaged(&self) -> bool;
    /// Completion is reported through `Notification::KeyboardHidden`.
    fn hide(&self, dismissal: Dismissal);
}

/// Quick-search overlay; reports `Notification::OverlayClosed`.
pub trait SearchOverlay: fmt::Debug {
    fn is_active(&self) -> bool;
}

/// Media recording session shared by all windows.
pub trait MediaRecording: fmt::Debug {
    fn is_recording(&self) -> bool;
    /// Ask the recorder to stop. It answers with
    /// `Notification::StopRecordingAck` carrying the same request id.
    fn request_stop(&self, request: StopRequestId);
    fn clear_stop_request(&self);
}

pub trait Layout: fmt::Debug {
    /// Whether `size` is what the current layout would give a window.
    fn matches(&self, size: Size) -> bool;
}

pub trait Screen: fmt::Debug {
    fn exit_fullscreen(&self);
    fn apply_display_flags(&self, flags: DisplayFlags);
    fn set_slow_transition(&self, slow: bool);
}

pub trait LockScreen: fmt::Debug {
    fn is_locked(&self) -> bool;
}

#[derive(Debug, Clone)]
pub struct ShellServices {
    pub launcher: Rc<dyn HomescreenLauncher>,
    pub keyboard: Rc<dyn Keyboard>,
    pub overlay: Rc<dyn SearchOverlay>,
    pub recording: Rc<dyn MediaRecording>,
    pub layout: Rc<dyn Layout>,
    pub screen: Rc<dyn Screen>,
    pub lock: Rc<dyn LockScreen>,
}

impl ShellServices {
    /// Services with only a home screen launcher; everything else is inert.
    pub fn new(launcher: Rc<dyn HomescreenLauncher>) -> Self {
        Self {
            launcher,
            keyboard: Rc::new(noop::NoopKeyboard),
            overlay: Rc::new(noop::NoopOverlay),
            recording: Rc::new(noop::NoopRecording),
            layout: Rc::new(noop::AnyLayout),
            screen: Rc::new(noop::NoopScreen),
            lock: Rc::new(noop::NoopLock),
        }
    }

    pub fn with_keyboard(mut self, keyboard: Rc<dyn Keyboard>) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn with_overlay(mut self, overlay: Rc<dyn SearchOverlay>) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn with_recording(mut self, recording: Rc<dyn MediaRecording>) -> Self {
        self.recording = recording;
        self
    }

    pub fn with_layout(mut self, layout: Rc<dyn Layout>) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_screen(mut self, screen: Rc<dyn Screen>) -> Self {
        self.screen = screen;
        self
    }

    pub fn with_lock(mut self, lock: Rc<dyn LockScreen>) -> Self {
        self.lock = lock;
        self
    }
}
