//! Debounced config file watcher.

use appwm_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Quiet period that must pass before a change is reported.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches one config file and signals when it changed.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// The file does not have to exist yet; its creation counts as a change.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }
        if !path.exists() {
            warn!(path = %path.display(), "config file missing, watching for creation");
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run until the notify backend goes away, sending `()` on `tx` once per
    /// debounced burst of changes.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.clone());
        let file_name = self.path.file_name().map(OsString::from).unwrap_or_default();

        let (raw_tx, mut raw_rx) = mpsc::channel::<()>(16);
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) if touches(&event, &file_name) => {
                    debug!("config file event: {:?}", event.kind);
                    let _ = raw_tx.try_send(());
                }
                Ok(_) => {}
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display())))?;

        info!(path = %self.path.display(), "watching config file");

        while raw_rx.recv().await.is_some() {
            if !settle(&mut raw_rx).await {
                break;
            }
            info!("config file changed");
            if tx.send(()).is_err() {
                debug!("no receivers for config change signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}

/// Whether a notify event modifies or creates the watched file.
fn touches(event: &Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|n| n == file_name.as_os_str()))
}

/// Swallow follow-up events until [`DEBOUNCE`] passes quietly.
///
/// Returns `false` when the event source closed meanwhile.
async fn settle(rx: &mut mpsc::Receiver<()>) -> bool {
    loop {
        match tokio::time::timeout(DEBOUNCE, rx.recv()).await {
            Err(_elapsed) => return true,
            Ok(Some(())) => continue,
            Ok(None) => return false,
        }
    }
}
