//! # Action filter scoping a registration.
//!
//! A [`BroadcastFilter`] decides which broadcasts a registered receiver
//! observes. Matching is by exact action string; a filter may list several
//! actions (any-of match). A broadcast whose action is not listed is never
//! delivered to the registration's receiver.

use std::sync::Arc;

use crate::broadcasts::Broadcast;

/// Exact-match action filter for broadcast registrations.
///
/// ## Example
/// ```rust
/// use logbridge::{Broadcast, BroadcastFilter};
///
/// let filter = BroadcastFilter::action("com.regrip.LOG_BROADCAST");
/// assert!(filter.matches(&Broadcast::new("com.regrip.LOG_BROADCAST")));
/// assert!(!filter.matches(&Broadcast::new("com.regrip.OTHER")));
/// ```
#[derive(Clone, Debug)]
pub struct BroadcastFilter {
    actions: Vec<Arc<str>>,
}

impl BroadcastFilter {
    /// Creates a filter matching a single action.
    pub fn action(action: impl Into<Arc<str>>) -> Self {
        Self {
            actions: vec![action.into()],
        }
    }

    /// Adds another action to match (any-of).
    #[inline]
    pub fn or_action(mut self, action: impl Into<Arc<str>>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Returns `true` if the broadcast's action is listed in this filter.
    #[inline]
    pub fn matches(&self, broadcast: &Broadcast) -> bool {
        self.actions.iter().any(|a| **a == *broadcast.action)
    }
}
