//! # Process-wide broadcast hub.
//!
//! [`SystemBus`] is a thin wrapper around [`tokio::sync::broadcast`] that
//! provides non-blocking sends from any context and runtime registration of
//! filtered receivers.
//!
//! ## Architecture
//! ```text
//! Senders (many):                    Registrations (many):
//!   producer 1 ──┐                     ┌──► dispatch worker ──► receiver 1
//!   producer 2 ──┼──► SystemBus ───────┼──► dispatch worker ──► receiver 2
//!   producer N ──┘  (broadcast chan)   └──► dispatch worker ──► receiver N
//! ```
//!
//! ## Rules
//! - **Non-blocking send**: `send()` never blocks; it calls
//!   `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent broadcasts for
//!   all registrations.
//! - **Lag handling**: slow registrations skip the oldest items and continue.
//! - **No persistence**: broadcasts are dropped if nothing is registered at
//!   send time.
//!
//! ## Registration
//! The bus holds the host [`Platform`] and consults it on every
//! registration: at or above the visibility-enforcing API level the legacy
//! [`SystemBus::register`] signature is rejected and callers must use
//! [`SystemBus::register_with_visibility`].

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::broadcasts::{Broadcast, BroadcastFilter, Receive, Registration, Visibility};
use crate::error::BridgeError;
use crate::platform::Platform;

/// Broadcast hub shared by senders and registered receivers.
///
/// Thin wrapper over [`tokio::sync::broadcast`] plus the platform gate for
/// registrations. Cheap to clone (internally holds an `Arc`-backed sender).
///
/// ### Properties
/// - **Non-blocking**: `send()` returns immediately.
/// - **Fire-and-forget**: no delivery or durability guarantees.
/// - **Registration-scoped delivery**: a registration only observes
///   broadcasts sent after it was created.
#[derive(Clone, Debug)]
pub struct SystemBus {
    tx: broadcast::Sender<Broadcast>,
    platform: Platform,
}

impl SystemBus {
    /// Creates a new bus for the given platform and channel capacity.
    ///
    /// ### Notes
    /// - Capacity is **shared** across all registrations (not per-receiver).
    /// - Registrations that lag behind skip the oldest items.
    /// - The minimum capacity is 1 (clamped).
    pub fn new(platform: Platform, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Broadcast>(capacity);
        Self { tx, platform }
    }

    /// Returns the platform this bus runs on.
    #[inline]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Sends a broadcast to all active registrations.
    ///
    /// - Takes ownership of the broadcast; the channel clones it per receiver.
    /// - If nothing is registered, the broadcast is dropped (this function
    ///   still returns immediately).
    pub fn send(&self, broadcast: Broadcast) {
        let _ = self.tx.send(broadcast);
    }

    /// Sends a borrowed broadcast by cloning it.
    ///
    /// Shorthand for `send(broadcast.clone())`, useful when you already have
    /// a reference.
    pub fn send_ref(&self, broadcast: &Broadcast) {
        let _ = self.tx.send(broadcast.clone());
    }

    /// Registers a receiver using the legacy signature, without a
    /// visibility declaration.
    ///
    /// Valid only below the visibility-enforcing API level; on newer
    /// platforms this returns [`BridgeError::VisibilityRequired`] instead of
    /// silently registering (a listener the caller believes active but is
    /// not would break the lifecycle contract).
    ///
    /// The registration is recorded as [`Visibility::Exported`], the host's
    /// historical default for the legacy signature.
    pub fn register(
        &self,
        receiver: Arc<dyn Receive>,
        filter: BroadcastFilter,
    ) -> Result<Registration, BridgeError> {
        if self.platform.requires_receiver_visibility() {
            return Err(BridgeError::VisibilityRequired {
                api_level: self.platform.api_level,
            });
        }
        Ok(Registration::spawn(
            self.tx.subscribe(),
            receiver,
            filter,
            Visibility::Exported,
        ))
    }

    /// Registers a receiver with an explicit visibility declaration.
    ///
    /// Accepted on every platform; required at or above the
    /// visibility-enforcing API level.
    pub fn register_with_visibility(
        &self,
        receiver: Arc<dyn Receive>,
        filter: BroadcastFilter,
        visibility: Visibility,
    ) -> Registration {
        Registration::spawn(self.tx.subscribe(), receiver, filter, visibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::RECEIVER_VISIBILITY_LEVEL;

    use async_trait::async_trait;

    struct Discard;

    #[async_trait]
    impl Receive for Discard {
        async fn on_broadcast(&self, _broadcast: &Broadcast) {}
        fn name(&self) -> &'static str {
            "discard"
        }
    }

    #[tokio::test]
    async fn test_legacy_register_rejected_on_enforcing_platform() {
        let bus = SystemBus::new(Platform::new(RECEIVER_VISIBILITY_LEVEL), 16);
        let err = bus
            .register(Arc::new(Discard), BroadcastFilter::action("demo.A"))
            .expect_err("legacy signature must be rejected");
        assert_eq!(err.as_label(), "visibility_required");
    }

    #[tokio::test]
    async fn test_legacy_register_accepted_on_older_platform() {
        let bus = SystemBus::new(Platform::new(RECEIVER_VISIBILITY_LEVEL - 1), 16);
        let registration = bus
            .register(Arc::new(Discard), BroadcastFilter::action("demo.A"))
            .expect("legacy signature must be accepted below the threshold");
        assert_eq!(registration.visibility(), Visibility::Exported);
        registration.unregister().await;
    }

    #[tokio::test]
    async fn test_explicit_visibility_accepted_everywhere() {
        for api_level in [RECEIVER_VISIBILITY_LEVEL - 1, RECEIVER_VISIBILITY_LEVEL + 1] {
            let bus = SystemBus::new(Platform::new(api_level), 16);
            let registration = bus.register_with_visibility(
                Arc::new(Discard),
                BroadcastFilter::action("demo.A"),
                Visibility::NotExported,
            );
            assert_eq!(registration.visibility(), Visibility::NotExported);
            registration.unregister().await;
        }
    }

    #[test]
    fn test_capacity_is_clamped() {
        // Capacity 0 would make the underlying channel constructor panic.
        let _bus = SystemBus::new(Platform::default(), 0);
    }
}
