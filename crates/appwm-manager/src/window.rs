//! The contract an application window offers to the manager.
//!
//! Windows are owned by whoever created them (app factory, home screen
//! launcher) and shared with the manager through [`WindowRef`]. All methods
//! take `&self`; implementations keep their own state behind interior
//! mutability. A window must never call back into the manager from inside
//! one of these methods: anything asynchronous it has to report (readiness,
//! termination) goes through a later [`Notification`](crate::Notification).

use std::fmt;
use std::rc::Rc;

use appwm_common::{Rotation, Size, Transition, WindowId};
use serde_json::Value;

/// Shared handle to a live window.
pub type WindowRef = Rc<dyn AppWindow>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    App,
    /// Generic browser window; several may share an origin.
    Browser,
    Homescreen,
}

/// Answer to "can you be shown right now?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    /// The window will emit `Notification::WindowReady` once prepared.
    Pending,
}

pub trait AppWindow: fmt::Debug {
    // -- Identity --

    fn id(&self) -> WindowId;
    fn kind(&self) -> WindowKind;
    fn origin(&self) -> String;
    fn manifest_url(&self) -> Option<String>;
    /// URL the window currently displays.
    fn url(&self) -> String;

    fn name(&self) -> String {
        self.origin()
    }

    /// Out-of-process windows can be blurred; in-process ones must be hidden.
    fn is_oop(&self) -> bool {
        true
    }

    fn is_homescreen(&self) -> bool {
        self.kind() == WindowKind::Homescreen
    }

    fn is_browser(&self) -> bool {
        self.kind() == WindowKind::Browser
    }

    // -- Liveness --

    fn is_dead(&self) -> bool;
    /// Ask the window to terminate itself. It reports back with
    /// `Notification::AppTerminated` when done.
    fn kill(&self);
    /// Relaunch the window if it died.
    fn ensure(&self);
    fn ready(&self) -> Readiness;

    // -- Visibility --

    fn open(&self, transition: Option<Transition>);
    fn close(&self, transition: Option<Transition>);
    /// `forced` hides at once without waiting for a screenshot.
    fn set_visible(&self, visible: bool, forced: bool);
    fn set_visible_for_screen_reader(&self, visible: bool);
    fn blur(&self);
    fn fade_out(&self);
    fn is_transitioning(&self) -> bool;
    fn broadcast(&self, message: &str, detail: Option<&Value>);
    /// Navigate without bringing the window to the foreground.
    fn modify_url_at_background(&self, url: &str);

    // -- Geometry --

    fn is_fullscreen(&self) -> bool;
    fn is_fullscreen_layout(&self) -> bool;
    /// Recompute geometry; a no-op when the size is already right.
    fn resize(&self);
    fn set_orientation(&self);
    /// Rotation the window is about to apply when opened.
    fn rotating_degree(&self) -> Option<Rotation>;
    /// Rotation closing this window would trigger.
    fn closing_rotation_degree(&self) -> Option<Rotation>;
    /// Size of the last completed resize, `None` if never resized.
    fn last_size(&self) -> Option<Size>;

    // -- Activity links --

    fn next_window(&self) -> Option<WindowId>;
    fn previous_window(&self) -> Option<WindowId>;
    fn caller(&self) -> Option<WindowId>;
    fn callee(&self) -> Option<WindowId>;
    fn set_caller(&self, caller: Option<WindowId>);
    fn set_callee(&self, callee: Option<WindowId>);
}
