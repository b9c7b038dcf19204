//! ActiveWindowTracker: the single foreground window and its display flags.

use appwm_common::{DisplayFlags, WindowError, WindowId};

use crate::registry::WindowRegistry;
use crate::window::WindowRef;

#[derive(Debug, Default)]
pub struct ActiveWindowTracker {
    active: Option<WindowId>,
    flags: DisplayFlags,
}

impl ActiveWindowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_id(&self) -> Option<WindowId> {
        self.active
    }

    /// The active window, if it is still registered.
    pub fn active(&self, registry: &WindowRegistry) -> Option<WindowRef> {
        self.active.and_then(|id| registry.get(id))
    }

    pub fn is_active(&self, id: WindowId) -> bool {
        self.active == Some(id)
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// Promote `id` to the active window.
    ///
    /// Flags are recomputed from the window and the window is asked to
    /// resize itself. An id that is not registered leaves everything as is.
    pub fn set_active(
        &mut self,
        registry: &WindowRegistry,
        id: WindowId,
    ) -> Result<WindowRef, WindowError> {
        let window = registry
            .get(id)
            .ok_or(WindowError::StaleActiveReference(id))?;
        self.active = Some(id);
        self.flags = DisplayFlags {
            fullscreen: window.is_fullscreen(),
            fullscreen_layout: window.is_fullscreen_layout(),
        };
        window.resize();
        Ok(window)
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.flags = DisplayFlags::default();
    }

    /// Clear the active window if it is `id`.
    pub fn clear_if(&mut self, id: WindowId) -> bool {
        if self.is_active(id) {
            self.clear();
            true
        } else {
            false
        }
    }

    /// Drop the fullscreen flags ahead of a switch.
    pub fn clear_fullscreen(&mut self) {
        self.flags = DisplayFlags::default();
    }
}
