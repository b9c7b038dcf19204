//! Show-window requests and their deferred activity/notification firing.

use appwm_common::ShellEvent;
use serde_json::Value;

use crate::notification::ShowWindowDetail;

use super::AppWindowManager;

const NOTIFICATION_CLICK: &str = "desktop-notification-click";

impl AppWindowManager {
    /// Make the foreground window visible again and act on `detail`.
    ///
    /// An activity takes precedence over a notification id. With the home
    /// screen in front, an activity fires straight away while a
    /// notification click waits until the home screen has been shown.
    pub fn show_window(&mut self, detail: ShowWindowDetail) {
        let foreground = self
            .active()
            .filter(|active| !self.is_home_origin(&active.origin()));
        if foreground.is_none() && !detail.is_actionable() {
            self.launch_homescreen();
            return;
        }
        let ShowWindowDetail {
            activity,
            notification_id,
        } = detail;

        if let Some(app) = foreground {
            app.set_visible(true, false);
            if let Some(activity) = activity {
                self.fire_activity(activity);
            } else if let Some(id) = notification_id {
                self.fire_notification_clicked(&id);
            }
            return;
        }

        if let Some(activity) = activity {
            self.fire_activity(activity);
        } else if let Some(id) = notification_id {
            self.launch_homescreen();
            self.fire_notification_clicked(&id);
        }
    }

    /// Show the home screen, displaying it if it is not already active.
    fn launch_homescreen(&mut self) {
        let Some(home) = self.homescreen(true) else {
            return;
        };
        if self.tracker.is_active(home.id()) {
            home.set_visible(true, false);
        } else {
            self.display(None);
        }
    }

    fn fire_activity(&self, activity: Value) {
        tracing::debug!("firing activity");
        self.publish(ShellEvent::ActivityRequested(activity));
    }

    fn fire_notification_clicked(&self, id: &str) {
        tracing::debug!(notification = id, "firing notification click");
        self.publish(ShellEvent::ContentNotificationClicked {
            kind: NOTIFICATION_CLICK.to_string(),
            id: id.to_string(),
        });
        self.publish(ShellEvent::NotificationClicked { id: id.to_string() });
    }
}
