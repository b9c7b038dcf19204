//! WindowRegistry: every live window by instance id.

use std::collections::{BTreeMap, BTreeSet};

use appwm_common::{WindowError, WindowId};

use crate::window::WindowRef;

/// Registered windows ordered by id, so "first match" lookups are stable.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, WindowRef>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a window. Returns `false` if the id was already taken, in
    /// which case the existing entry is replaced.
    pub fn register(&mut self, window: WindowRef) -> bool {
        let id = window.id();
        let replaced = self.windows.insert(id, window).is_some();
        if replaced {
            tracing::warn!(window = %id, "window registered twice");
        }
        !replaced
    }

    pub fn unregister(&mut self, id: WindowId) -> Option<WindowRef> {
        self.windows.remove(&id)
    }

    pub fn get(&self, id: WindowId) -> Option<WindowRef> {
        self.windows.get(&id).cloned()
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// First window matching `origin` and, when given, `manifest_url`.
    ///
    /// Browser windows share origin semantics, so one only matches when the
    /// URL it displays equals the requested origin.
    pub fn find_by_origin(&self, origin: &str, manifest_url: Option<&str>) -> Option<WindowRef> {
        self.matching(origin, manifest_url).next()
    }

    /// Every window of `origin`, browser windows included, optionally
    /// narrowed by `manifest_url`.
    pub fn all_with_origin(&self, origin: &str, manifest_url: Option<&str>) -> Vec<WindowRef> {
        self.with_origin(origin, manifest_url).cloned().collect()
    }

    fn matching<'a>(
        &'a self,
        origin: &'a str,
        manifest_url: Option<&'a str>,
    ) -> impl Iterator<Item = WindowRef> + 'a {
        self.with_origin(origin, manifest_url)
            .filter(move |w| !w.is_browser() || w.url() == origin)
            .cloned()
    }

    fn with_origin<'a>(
        &'a self,
        origin: &'a str,
        manifest_url: Option<&'a str>,
    ) -> impl Iterator<Item = &'a WindowRef> + 'a {
        self.windows
            .values()
            .filter(move |w| w.origin() == origin)
            .filter(move |w| match manifest_url {
                Some(manifest) => w.manifest_url().as_deref() == Some(manifest),
                None => true,
            })
    }

    /// Iterate over the current entries. Restartable; snapshot with
    /// [`ids`](Self::ids) before mutating.
    pub fn windows(&self) -> impl Iterator<Item = &WindowRef> {
        self.windows.values()
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    /// `window` followed by its registered descendants along `next_window`.
    ///
    /// Stops at the first unregistered link, and at a revisit so a cyclic
    /// chain can never spin.
    pub fn chain_from(&self, window: &WindowRef) -> Vec<WindowRef> {
        let mut seen = BTreeSet::from([window.id()]);
        let mut chain = vec![window.clone()];
        let mut cursor = window.next_window();
        while let Some(id) = cursor {
            if !seen.insert(id) {
                tracing::warn!(error = %WindowError::ChainCycle(id), "stopping chain walk");
                break;
            }
            let Some(next) = self.get(id) else {
                tracing::debug!(window = %id, "chain link not registered");
                break;
            };
            cursor = next.next_window();
            chain.push(next);
        }
        chain
    }

    /// Deepest descendant of `window`, or `window` itself.
    pub fn leaf_of(&self, window: &WindowRef) -> WindowRef {
        self.chain_from(window)
            .pop()
            .unwrap_or_else(|| window.clone())
    }
}
