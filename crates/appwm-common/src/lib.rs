pub mod errors;
pub mod events;
pub mod id;
pub mod logging;
pub mod types;

pub use errors::{AppWmError, ConfigError, WindowError};
pub use events::{EventBus, ShellEvent};
pub use id::{new_correlation_id, WindowId};
pub use types::{DisplayFlags, Rotation, Size, Transition};

pub type Result<T> = std::result::Result<T, AppWmError>;
