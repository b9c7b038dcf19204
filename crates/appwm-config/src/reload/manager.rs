//! Reload loop: watcher signal in, validated config out.

use crate::schema::AppWmConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use appwm_common::ConfigError;
use std::path::PathBuf;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Keeps a [`watch`] channel of the config file's latest valid contents.
///
/// Hosts diff successive values with
/// [`SettingChange::between`](crate::SettingChange::between) and feed the
/// result to the window manager.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the file (defaults when unreadable) and spawn the watch loop.
    ///
    /// Must be called inside a tokio runtime.
    pub async fn start(config_path: PathBuf) -> (AppWmConfig, watch::Receiver<AppWmConfig>) {
        let initial = toml_loader::load_from_path(&config_path).unwrap_or_else(|e| {
            warn!("failed to load config: {e}, using defaults");
            AppWmConfig::default()
        });

        let (config_tx, config_rx) = watch::channel(initial.clone());
        let manager = ReloadManager { config_path };
        tokio::spawn(async move {
            manager.run(config_tx).await;
        });

        (initial, config_rx)
    }

    async fn run(&self, config_tx: watch::Sender<AppWmConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => match self.reload() {
                    Ok(config) => {
                        // Skip no-op saves so receivers only wake on real changes.
                        let changed = config_tx.send_if_modified(|current| {
                            if *current == config {
                                false
                            } else {
                                *current = config;
                                true
                            }
                        });
                        if config_tx.is_closed() {
                            info!("all config receivers dropped, stopping reload");
                            break;
                        }
                        if changed {
                            info!(path = %self.config_path.display(), "config reloaded");
                        }
                    }
                    Err(e) => warn!("config reload failed: {e}"),
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher stopped");
                    break;
                }
            }
        }
    }

    /// Unlike the initial load, a reload that fails validation is rejected
    /// and the previous config stays in effect.
    fn reload(&self) -> Result<AppWmConfig, ConfigError> {
        let config = toml_loader::load_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
