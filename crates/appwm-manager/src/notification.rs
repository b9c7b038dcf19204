//! Inbound notifications the manager reacts to.

use appwm_common::WindowId;
use appwm_config::SettingChange;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::gate::StopRequestId;
use crate::window::WindowRef;

/// Request to bring an application to the foreground (or not).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchConfig {
    pub origin: String,
    #[serde(rename = "manifestURL")]
    pub manifest_url: Option<String>,
    pub url: String,
    pub stay_background: bool,
    #[serde(rename = "changeURL")]
    pub change_url: bool,
    pub is_activity: bool,
}

/// Payload of a show-window request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowWindowDetail {
    pub activity: Option<Value>,
    pub notification_id: Option<String>,
}

impl ShowWindowDetail {
    pub fn is_actionable(&self) -> bool {
        self.activity.is_some() || self.notification_id.is_some()
    }
}

#[derive(Debug, Clone)]
pub enum Notification {
    // -- Lifecycle --
    AppCreated(WindowRef),
    AppTerminated(WindowRef),
    HomescreenCreated(WindowRef),
    /// Someone else opened a window; it is now the active one.
    AppOpening(WindowRef),
    AppOpened(WindowRef),
    HomescreenOpened(WindowRef),

    // -- Requests --
    LaunchApp(LaunchConfig),
    KillApp {
        origin: String,
        manifest_url: Option<String>,
    },
    ApplicationUninstalled {
        origin: String,
    },
    DisplayApp(WindowRef),
    AppRequestOpen(WindowRef),
    AppRequestClose(WindowRef),
    HomePressed,
    HomescreenChanged,
    FtuSkip,
    ShowWindow(Option<ShowWindowDetail>),
    LaunchActivity {
        detail: Value,
        is_activity: bool,
        inline: bool,
    },

    // -- Presentation --
    AttentionOpened,
    SystemResize,
    OrientationChange,
    ResetOrientation,
    PermissionDialogHidden,
    HomeGesture(bool),
    HideWindow(Option<Value>),
    ScreenReaderVisibility(bool),
    CardViewBeforeShow,
    SheetsTransitionStart,
    InputMethodContextChange(Value),
    Localized,

    // -- Gate completions --
    KeyboardHidden,
    OverlayClosed,
    StopRecordingAck {
        request: StopRequestId,
        success: bool,
    },
    WindowReady(WindowId),

    SettingChanged(SettingChange),
}

impl Notification {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::AppCreated(_) => "app-created",
            Notification::AppTerminated(_) => "app-terminated",
            Notification::HomescreenCreated(_) => "homescreen-created",
            Notification::AppOpening(_) => "app-opening",
            Notification::AppOpened(_) => "app-opened",
            Notification::HomescreenOpened(_) => "homescreen-opened",
            Notification::LaunchApp(_) => "launch-app",
            Notification::KillApp { .. } => "kill-app",
            Notification::ApplicationUninstalled { .. } => "application-uninstalled",
            Notification::DisplayApp(_) => "displayapp",
            Notification::AppRequestOpen(_) => "app-request-open",
            Notification::AppRequestClose(_) => "app-request-close",
            Notification::HomePressed => "home-pressed",
            Notification::HomescreenChanged => "homescreen-changed",
            Notification::FtuSkip => "ftu-skip",
            Notification::ShowWindow(_) => "show-window",
            Notification::LaunchActivity { .. } => "launch-activity",
            Notification::AttentionOpened => "attention-opened",
            Notification::SystemResize => "system-resize",
            Notification::OrientationChange => "orientationchange",
            Notification::ResetOrientation => "reset-orientation",
            Notification::PermissionDialogHidden => "permission-dialog-hidden",
            Notification::HomeGesture(_) => "home-gesture",
            Notification::HideWindow(_) => "hide-window",
            Notification::ScreenReaderVisibility(_) => "screen-reader-visibility",
            Notification::CardViewBeforeShow => "card-view-before-show",
            Notification::SheetsTransitionStart => "sheets-transition-start",
            Notification::InputMethodContextChange(_) => "input-method-context-change",
            Notification::Localized => "localized",
            Notification::KeyboardHidden => "keyboard-hidden",
            Notification::OverlayClosed => "overlay-closed",
            Notification::StopRecordingAck { .. } => "stop-recording-ack",
            Notification::WindowReady(_) => "window-ready",
            Notification::SettingChanged(_) => "setting-changed",
        }
    }
}
