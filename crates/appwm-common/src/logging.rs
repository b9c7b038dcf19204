//! Tracing subscriber setup for hosts embedding the window manager.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "appwm=info";

/// Install a global fmt subscriber filtered by `RUST_LOG` plus `directive`.
///
/// An unparsable directive falls back to [`DEFAULT_DIRECTIVE`]. Returns
/// `false` when a global subscriber was already installed.
pub fn init(directive: Option<&str>) -> bool {
    let filter = EnvFilter::from_default_env().add_directive(
        directive
            .unwrap_or(DEFAULT_DIRECTIVE)
            .parse()
            .unwrap_or_else(|_| default_directive()),
    );

    match tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("logging already initialised: {e}");
            false
        }
    }
}

fn default_directive() -> tracing_subscriber::filter::Directive {
    // A literal target=level directive always parses.
    DEFAULT_DIRECTIVE
        .parse()
        .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
}
