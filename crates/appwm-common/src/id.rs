use serde::{Deserialize, Serialize};
use std::fmt;

/// Short id used to tie the log lines of one display request together.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Instance identity of an application window.
///
/// Unique per launch and never reused, so ordering by id follows creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_id_length() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
    }

    #[test]
    fn correlation_id_is_hex() {
        let cid = new_correlation_id();
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn correlation_id_is_unique() {
        let a = new_correlation_id();
        let b = new_correlation_id();
        assert_ne!(a, b);
    }

    #[test]
    fn window_id_display() {
        assert_eq!(WindowId(12).to_string(), "window-12");
    }

    #[test]
    fn window_id_orders_by_creation() {
        let mut ids = vec![WindowId(3), WindowId(1), WindowId(2)];
        ids.sort();
        assert_eq!(ids, vec![WindowId(1), WindowId(2), WindowId(3)]);
    }

    #[test]
    fn window_id_serialization() {
        let id = WindowId(42);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: WindowId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
