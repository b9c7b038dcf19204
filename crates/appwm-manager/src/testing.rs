//! Journaling mocks for windows and shell collaborators.
//!
//! Every side effect is appended to a shared journal as a short line such as
//! `"window-2 open invoked"`, so tests can assert on ordering.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use appwm_common::{DisplayFlags, Rotation, Size, Transition, WindowId};
use appwm_config::AppWmConfig;
use serde_json::Value;

use crate::gate::StopRequestId;
use crate::manager::AppWindowManager;
use crate::notification::Notification;
use crate::shell::{
    Dismissal, HomescreenLauncher, Keyboard, Layout, LockScreen, MediaRecording, Screen,
    SearchOverlay, ShellServices,
};
use crate::window::{AppWindow, Readiness, WindowKind, WindowRef};

pub(crate) type Journal = Rc<RefCell<Vec<String>>>;

pub(crate) const HOME_ORIGIN: &str = "app://homescreen.local";
pub(crate) const HOME_ID: WindowId = WindowId(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpenState {
    Idle,
    Opened,
    Closed,
}

#[derive(Debug)]
pub(crate) struct MockWindow {
    id: WindowId,
    kind: WindowKind,
    origin: String,
    manifest_url: Option<String>,
    pub url: RefCell<String>,
    pub dead: Cell<bool>,
    pub oop: Cell<bool>,
    pub readiness: Cell<Readiness>,
    pub fullscreen: Cell<bool>,
    pub fullscreen_layout: Cell<bool>,
    pub transitioning: Cell<bool>,
    pub rotating: Cell<Option<Rotation>>,
    pub closing_rotation: Cell<Option<Rotation>>,
    pub size: Cell<Option<Size>>,
    pub next: Cell<Option<WindowId>>,
    pub previous: Cell<Option<WindowId>>,
    pub caller: Cell<Option<WindowId>>,
    pub callee: Cell<Option<WindowId>>,
    pub state: Cell<OpenState>,
    pub opened_with: RefCell<Vec<Option<Transition>>>,
    pub closed_with: RefCell<Vec<Option<Transition>>>,
    journal: Journal,
}

impl MockWindow {
    pub fn new(id: WindowId, kind: WindowKind, origin: &str, journal: &Journal) -> Rc<Self> {
        let manifest = Some(format!("{origin}/manifest.webapp"));
        let url = format!("{origin}/index.html");
        Rc::new(Self::build(id, kind, origin, manifest, url, journal))
    }

    pub fn browser(id: WindowId, origin: &str, url: &str, journal: &Journal) -> Rc<Self> {
        Rc::new(Self::build(
            id,
            WindowKind::Browser,
            origin,
            None,
            url.to_string(),
            journal,
        ))
    }

    fn build(
        id: WindowId,
        kind: WindowKind,
        origin: &str,
        manifest_url: Option<String>,
        url: String,
        journal: &Journal,
    ) -> Self {
        Self {
            id,
            kind,
            origin: origin.to_string(),
            manifest_url,
            url: RefCell::new(url),
            dead: Cell::new(false),
            oop: Cell::new(true),
            readiness: Cell::new(Readiness::Ready),
            fullscreen: Cell::new(false),
            fullscreen_layout: Cell::new(false),
            transitioning: Cell::new(false),
            rotating: Cell::new(None),
            closing_rotation: Cell::new(None),
            size: Cell::new(None),
            next: Cell::new(None),
            previous: Cell::new(None),
            caller: Cell::new(None),
            callee: Cell::new(None),
            state: Cell::new(OpenState::Idle),
            opened_with: RefCell::new(Vec::new()),
            closed_with: RefCell::new(Vec::new()),
            journal: journal.clone(),
        }
    }

    pub fn handle(self: &Rc<Self>) -> WindowRef {
        self.clone()
    }

    fn log(&self, entry: String) {
        self.journal.borrow_mut().push(format!("{} {entry}", self.id));
    }

    pub fn last_open(&self) -> Option<Option<Transition>> {
        self.opened_with.borrow().last().cloned()
    }

    pub fn last_close(&self) -> Option<Option<Transition>> {
        self.closed_with.borrow().last().cloned()
    }
}

fn transition_name(transition: &Option<Transition>) -> &str {
    transition.as_ref().map(Transition::as_str).unwrap_or("default")
}

impl AppWindow for MockWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn kind(&self) -> WindowKind {
        self.kind
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn manifest_url(&self) -> Option<String> {
        self.manifest_url.clone()
    }

    fn url(&self) -> String {
        self.url.borrow().clone()
    }

    fn is_oop(&self) -> bool {
        self.oop.get()
    }

    fn is_dead(&self) -> bool {
        self.dead.get()
    }

    fn kill(&self) {
        self.log("kill".into());
    }

    fn ensure(&self) {
        self.dead.set(false);
        self.log("ensure".into());
    }

    fn ready(&self) -> Readiness {
        self.readiness.get()
    }

    fn open(&self, transition: Option<Transition>) {
        self.log(format!("open {}", transition_name(&transition)));
        self.state.set(OpenState::Opened);
        self.opened_with.borrow_mut().push(transition);
    }

    fn close(&self, transition: Option<Transition>) {
        self.log(format!("close {}", transition_name(&transition)));
        self.state.set(OpenState::Closed);
        self.closed_with.borrow_mut().push(transition);
    }

    fn set_visible(&self, visible: bool, forced: bool) {
        self.log(format!("set_visible {visible} forced={forced}"));
    }

    fn set_visible_for_screen_reader(&self, visible: bool) {
        self.log(format!("screen_reader {visible}"));
    }

    fn blur(&self) {
        self.log("blur".into());
    }

    fn fade_out(&self) {
        self.log("fade_out".into());
    }

    fn is_transitioning(&self) -> bool {
        self.transitioning.get()
    }

    fn broadcast(&self, message: &str, detail: Option<&Value>) {
        match detail {
            Some(detail) => self.log(format!("broadcast {message} {detail}")),
            None => self.log(format!("broadcast {message}")),
        }
    }

    fn modify_url_at_background(&self, url: &str) {
        *self.url.borrow_mut() = url.to_string();
        self.log(format!("modify_url {url}"));
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen.get()
    }

    fn is_fullscreen_layout(&self) -> bool {
        self.fullscreen_layout.get()
    }

    fn resize(&self) {
        self.log("resize".into());
    }

    fn set_orientation(&self) {
        self.log("set_orientation".into());
    }

    fn rotating_degree(&self) -> Option<Rotation> {
        self.rotating.get()
    }

    fn closing_rotation_degree(&self) -> Option<Rotation> {
        self.closing_rotation.get()
    }

    fn last_size(&self) -> Option<Size> {
        self.size.get()
    }

    fn next_window(&self) -> Option<WindowId> {
        self.next.get()
    }

    fn previous_window(&self) -> Option<WindowId> {
        self.previous.get()
    }

    fn caller(&self) -> Option<WindowId> {
        self.caller.get()
    }

    fn callee(&self) -> Option<WindowId> {
        self.callee.get()
    }

    fn set_caller(&self, caller: Option<WindowId>) {
        self.caller.set(caller);
        self.log(format!("set_caller {}", describe(caller)));
    }

    fn set_callee(&self, callee: Option<WindowId>) {
        self.callee.set(callee);
        self.log(format!("set_callee {}", describe(callee)));
    }
}

fn describe(id: Option<WindowId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "none".into())
}

/// Link `parent -> child` in the window chain.
pub(crate) fn chain(parent: &MockWindow, child: &MockWindow) {
    parent.next.set(Some(child.id()));
    child.previous.set(Some(parent.id()));
}

// -- Collaborators --

#[derive(Debug)]
pub(crate) struct MockLauncher {
    pub home: RefCell<Option<Rc<MockWindow>>>,
    pub ready: Cell<bool>,
    journal: Journal,
}

impl HomescreenLauncher for MockLauncher {
    fn origin(&self) -> String {
        HOME_ORIGIN.to_string()
    }

    fn is_ready(&self) -> bool {
        self.ready.get()
    }

    fn homescreen(&self, create: bool) -> Option<WindowRef> {
        if let Some(home) = self.home.borrow().as_ref() {
            return Some(home.clone());
        }
        if !create {
            return None;
        }
        self.journal.borrow_mut().push("launcher create".into());
        let home = MockWindow::new(HOME_ID, WindowKind::Homescreen, HOME_ORIGIN, &self.journal);
        *self.home.borrow_mut() = Some(home.clone());
        Some(home)
    }
}

#[derive(Debug)]
pub(crate) struct MockKeyboard {
    pub engaged: Cell<bool>,
    journal: Journal,
}

impl Keyboard for MockKeyboard {
    fn is_engaged(&self) -> bool {
        self.engaged.get()
    }

    fn hide(&self, dismissal: Dismissal) {
        let how = match dismissal {
            Dismissal::Animated => "animated",
            Dismissal::Immediate => "immediate",
        };
        self.journal.borrow_mut().push(format!("keyboard hide {how}"));
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockOverlay {
    pub active: Cell<bool>,
}

impl SearchOverlay for MockOverlay {
    fn is_active(&self) -> bool {
        self.active.get()
    }
}

#[derive(Debug)]
pub(crate) struct MockRecording {
    pub recording: Cell<bool>,
    pub requests: RefCell<Vec<StopRequestId>>,
    journal: Journal,
}

impl MediaRecording for MockRecording {
    fn is_recording(&self) -> bool {
        self.recording.get()
    }

    fn request_stop(&self, request: StopRequestId) {
        self.requests.borrow_mut().push(request);
        self.journal
            .borrow_mut()
            .push(format!("recording stop {}", request.0));
    }

    fn clear_stop_request(&self) {
        self.journal.borrow_mut().push("recording clear".into());
    }
}

#[derive(Debug)]
pub(crate) struct MockLayout {
    pub size: Cell<Size>,
}

impl Layout for MockLayout {
    fn matches(&self, size: Size) -> bool {
        self.size.get() == size
    }
}

#[derive(Debug)]
pub(crate) struct MockScreen {
    pub flags: Cell<DisplayFlags>,
    pub slow: Cell<bool>,
    journal: Journal,
}

impl Screen for MockScreen {
    fn exit_fullscreen(&self) {
        self.journal.borrow_mut().push("screen exit_fullscreen".into());
    }

    fn apply_display_flags(&self, flags: DisplayFlags) {
        self.flags.set(flags);
    }

    fn set_slow_transition(&self, slow: bool) {
        self.slow.set(slow);
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockLock {
    pub locked: Cell<bool>,
}

impl LockScreen for MockLock {
    fn is_locked(&self) -> bool {
        self.locked.get()
    }
}

/// A manager wired to mocks, plus handles to poke them.
pub(crate) struct Harness {
    pub manager: AppWindowManager,
    pub journal: Journal,
    pub launcher: Rc<MockLauncher>,
    pub keyboard: Rc<MockKeyboard>,
    pub overlay: Rc<MockOverlay>,
    pub recording: Rc<MockRecording>,
    pub layout: Rc<MockLayout>,
    pub screen: Rc<MockScreen>,
    pub lock: Rc<MockLock>,
    next_id: Cell<u64>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(&AppWmConfig::default())
    }

    pub fn with_config(config: &AppWmConfig) -> Self {
        let journal: Journal = Rc::new(RefCell::new(Vec::new()));
        let launcher = Rc::new(MockLauncher {
            home: RefCell::new(None),
            ready: Cell::new(true),
            journal: journal.clone(),
        });
        let keyboard = Rc::new(MockKeyboard {
            engaged: Cell::new(false),
            journal: journal.clone(),
        });
        let overlay = Rc::new(MockOverlay::default());
        let recording = Rc::new(MockRecording {
            recording: Cell::new(false),
            requests: RefCell::new(Vec::new()),
            journal: journal.clone(),
        });
        let layout = Rc::new(MockLayout {
            size: Cell::new(Size::new(320.0, 480.0)),
        });
        let screen = Rc::new(MockScreen {
            flags: Cell::new(DisplayFlags::default()),
            slow: Cell::new(false),
            journal: journal.clone(),
        });
        let lock = Rc::new(MockLock::default());

        let services = ShellServices::new(launcher.clone())
            .with_keyboard(keyboard.clone())
            .with_overlay(overlay.clone())
            .with_recording(recording.clone())
            .with_layout(layout.clone())
            .with_screen(screen.clone())
            .with_lock(lock.clone());

        Self {
            manager: AppWindowManager::new(config, services),
            journal,
            launcher,
            keyboard,
            overlay,
            recording,
            layout,
            screen,
            lock,
            next_id: Cell::new(1),
        }
    }

    fn next_id(&self) -> WindowId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        WindowId(id)
    }

    /// An app window that has not been announced to the manager yet.
    pub fn unregistered_app(&self, origin: &str) -> Rc<MockWindow> {
        MockWindow::new(self.next_id(), WindowKind::App, origin, &self.journal)
    }

    /// An app window announced through `AppCreated`.
    pub fn app(&mut self, origin: &str) -> Rc<MockWindow> {
        let window = self.unregistered_app(origin);
        self.manager.handle(Notification::AppCreated(window.handle()));
        window
    }

    /// Create and register the home screen.
    pub fn home(&mut self) -> Rc<MockWindow> {
        self.launcher.homescreen(true);
        let home = self.launcher.home.borrow().clone().expect("home created");
        self.manager
            .handle(Notification::HomescreenCreated(home.handle()));
        home
    }

    /// Make `window` active the way an external opener would.
    pub fn activate(&mut self, window: &Rc<MockWindow>) {
        self.manager.handle(Notification::AppOpened(window.handle()));
    }

    pub fn entries(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }

    pub fn clear_journal(&self) {
        self.journal.borrow_mut().clear();
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.journal.borrow().iter().position(|e| e == entry)
    }

    pub fn active_id(&self) -> Option<WindowId> {
        self.manager.active_id()
    }
}
