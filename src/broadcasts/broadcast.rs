//! # System broadcasts delivered through the bus.
//!
//! A [`Broadcast`] is one process-wide notification: an action naming the
//! channel it belongs to, plus named string extras carrying the payload.
//!
//! ## Ordering guarantees
//! Each broadcast has a globally unique sequence number (`seq`) that
//! increases monotonically. A single registration observes broadcasts in
//! `seq` order; `seq` can be used to restore order across registrations.
//!
//! ## Example
//! ```rust
//! use logbridge::Broadcast;
//!
//! let b = Broadcast::new("com.regrip.LOG_BROADCAST")
//!     .with_extra("log_data", "ERROR: disk full");
//!
//! assert_eq!(&*b.action, "com.regrip.LOG_BROADCAST");
//! assert_eq!(b.extra("log_data"), Some("ERROR: disk full"));
//! assert_eq!(b.extra("other"), None);
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for broadcast ordering.
static BROADCAST_SEQ: AtomicU64 = AtomicU64::new(0);

/// One system-wide notification with named string extras.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `action`: channel identifier the broadcast is sent on
/// - extras: named string payload, read via [`Broadcast::extra`]
///
/// Cloning is cheap: the action, extra keys and values are `Arc<str>`.
#[derive(Clone, Debug)]
pub struct Broadcast {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Action (channel identifier) this broadcast is sent on.
    pub action: Arc<str>,

    /// Named string extras carried alongside the action.
    extras: HashMap<Arc<str>, Arc<str>>,
}

impl Broadcast {
    /// Creates a new broadcast for the given action with the current
    /// timestamp and next sequence number.
    pub fn new(action: impl Into<Arc<str>>) -> Self {
        Self {
            seq: BROADCAST_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            action: action.into(),
            extras: HashMap::new(),
        }
    }

    /// Attaches a named string extra.
    #[inline]
    pub fn with_extra(mut self, key: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Returns the extra stored under `key`, if present.
    #[inline]
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(|v| v.as_ref())
    }

    /// Returns `true` if an extra is stored under `key`.
    #[inline]
    pub fn has_extra(&self, key: &str) -> bool {
        self.extras.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extras_roundtrip() {
        let b = Broadcast::new("demo.ACTION")
            .with_extra("log_data", "hello")
            .with_extra("origin", "unit-test");

        assert_eq!(b.extra("log_data"), Some("hello"));
        assert_eq!(b.extra("origin"), Some("unit-test"));
        assert!(b.has_extra("log_data"));
        assert!(!b.has_extra("missing"));
        assert_eq!(b.extra("missing"), None);
    }

    #[test]
    fn test_seq_is_monotonic() {
        let first = Broadcast::new("demo.ACTION");
        let second = Broadcast::new("demo.ACTION");
        assert!(second.seq > first.seq, "seq must increase across broadcasts");
    }
}
