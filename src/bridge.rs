//! # LogBridge: relays log broadcasts into one outgoing event stream.
//!
//! [`LogBridge`] is a stream producer bridging one broadcast action to one
//! consumer-facing channel, with correct listener lifecycle.
//!
//! ## Architecture
//! ```text
//! sender ── send(Broadcast{action, log_data}) ──► SystemBus
//!                                                    │ (filtered registration,
//!                                                    │  created on listen)
//!                                                    ▼
//!                                            dispatch worker
//!                                                    │ extra("log_data")?
//!                                 absent ── drop ◄───┤
//!                                                    ▼ present
//!                                          sink.success(payload)
//!
//! consumer ──► EventChannel::listen(sink)  ──► on_listen  : register
//! consumer ──► EventChannel::cancel()      ──► on_cancel  : unregister
//! ```
//!
//! ## Lifecycle
//! Two states, held as the registration slot:
//! - **Idle** (`None`): no listener registered, nothing is emitted.
//! - **Listening** (`Some`): one registration is active; every matching
//!   broadcast carrying the payload extra yields exactly one emission.
//!
//! Transitions: `on_listen` Idle→Listening (rejected while Listening),
//! `on_cancel` Listening→Idle (no-op while Idle). The slot is non-empty iff
//! a subscription is active.
//!
//! ## Registration mode
//! The registration call is selected once, at listen time, by the bus
//! platform's capability flag: platforms enforcing receiver visibility get
//! an explicit [`Visibility::Exported`] declaration (the stream is fed by
//! broadcasts from outside the owning process); older platforms get the
//! legacy signature.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::broadcasts::{Broadcast, BroadcastFilter, Receive, Registration, SystemBus, Visibility};
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::stream::{EventChannel, EventSink, StreamHandler};

/// Bridges one broadcast action to one outgoing event stream.
///
/// At most one subscription is active per bridge instance; the registration
/// handle is owned exclusively by the bridge and mutated only by
/// `on_listen`/`on_cancel`.
pub struct LogBridge {
    cfg: BridgeConfig,
    bus: SystemBus,
    registration: Mutex<Option<Registration>>,
}

impl LogBridge {
    /// Creates an idle bridge over the given bus.
    pub fn new(bus: SystemBus, cfg: BridgeConfig) -> Self {
        Self {
            cfg,
            bus,
            registration: Mutex::new(None),
        }
    }

    /// Builds the consumer-facing channel, named per the configuration and
    /// bound to this bridge.
    pub fn channel(self: &Arc<Self>) -> EventChannel {
        EventChannel::new(self.cfg.channel.clone(), Arc::clone(self) as Arc<dyn StreamHandler>)
    }

    /// Returns `true` while a subscription is active.
    pub async fn is_listening(&self) -> bool {
        self.registration.lock().await.is_some()
    }
}

/// Registered receiver forwarding one extra of each matching broadcast.
struct Forwarder {
    payload_key: Arc<str>,
    sink: Arc<dyn EventSink>,
}

#[async_trait]
impl Receive for Forwarder {
    async fn on_broadcast(&self, broadcast: &Broadcast) {
        // Broadcasts without the payload extra are dropped, not surfaced.
        if let Some(payload) = broadcast.extra(&self.payload_key) {
            self.sink.success(payload.to_string()).await;
        }
    }

    fn name(&self) -> &'static str {
        "log-bridge"
    }
}

#[async_trait]
impl StreamHandler for LogBridge {
    /// Registers the forwarding receiver.
    ///
    /// Rejects a second listen while one is active; the existing
    /// subscription is left undisturbed.
    async fn on_listen(&self, sink: Arc<dyn EventSink>) -> Result<(), BridgeError> {
        let mut slot = self.registration.lock().await;
        if slot.is_some() {
            return Err(BridgeError::AlreadyListening);
        }

        let receiver = Arc::new(Forwarder {
            payload_key: self.cfg.payload_key.clone(),
            sink,
        });
        let filter = BroadcastFilter::action(self.cfg.action.clone());

        let registration = if self.bus.platform().requires_receiver_visibility() {
            self.bus
                .register_with_visibility(receiver, filter, Visibility::Exported)
        } else {
            self.bus.register(receiver, filter)?
        };

        *slot = Some(registration);
        Ok(())
    }

    /// Deregisters the receiver, if one is active.
    ///
    /// Idempotent; awaits the dispatch worker, so once this returns the
    /// sink observes nothing further.
    async fn on_cancel(&self) {
        let registration = self.registration.lock().await.take();
        if let Some(registration) = registration {
            registration.unregister().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Platform, RECEIVER_VISIBILITY_LEVEL};

    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    struct CollectSink {
        emissions: StdMutex<Vec<String>>,
    }

    impl CollectSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                emissions: StdMutex::new(Vec::new()),
            })
        }

        fn emissions(&self) -> Vec<String> {
            self.emissions.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventSink for CollectSink {
        async fn success(&self, value: String) {
            self.emissions.lock().unwrap().push(value);
        }
    }

    async fn wait_for_count(sink: &CollectSink, count: usize) {
        for _ in 0..200 {
            if sink.emissions().len() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!(
            "expected {} emissions, saw {:?}",
            count,
            sink.emissions()
        );
    }

    fn bridge_on(platform: Platform) -> (SystemBus, Arc<LogBridge>) {
        let bus = SystemBus::new(platform, 64);
        let bridge = Arc::new(LogBridge::new(bus.clone(), BridgeConfig::default()));
        (bus, bridge)
    }

    fn bridge() -> (SystemBus, Arc<LogBridge>) {
        bridge_on(Platform::default())
    }

    fn log_broadcast(payload: &str) -> Broadcast {
        Broadcast::new("com.regrip.LOG_BROADCAST").with_extra("log_data", payload)
    }

    #[tokio::test]
    async fn test_forwards_payload_while_listening() {
        let (bus, bridge) = bridge();
        let channel = bridge.channel();
        let sink = CollectSink::new();

        channel.listen(sink.clone()).await.unwrap();
        bus.send(log_broadcast("ERROR: disk full"));

        wait_for_count(&sink, 1).await;
        assert_eq!(sink.emissions(), vec!["ERROR: disk full"]);
        channel.cancel().await;
    }

    #[tokio::test]
    async fn test_forwards_in_delivery_order_exactly_once() {
        let (bus, bridge) = bridge();
        let channel = bridge.channel();
        let sink = CollectSink::new();

        channel.listen(sink.clone()).await.unwrap();
        for i in 0..10 {
            bus.send(log_broadcast(&format!("line-{i}")));
        }

        wait_for_count(&sink, 10).await;
        let expected: Vec<String> = (0..10).map(|i| format!("line-{i}")).collect();
        assert_eq!(sink.emissions(), expected);
        channel.cancel().await;
    }

    #[tokio::test]
    async fn test_missing_payload_is_dropped() {
        let (bus, bridge) = bridge();
        let channel = bridge.channel();
        let sink = CollectSink::new();

        channel.listen(sink.clone()).await.unwrap();
        bus.send(Broadcast::new("com.regrip.LOG_BROADCAST"));
        bus.send(Broadcast::new("com.regrip.LOG_BROADCAST").with_extra("other", "x"));
        bus.send(log_broadcast("kept"));

        wait_for_count(&sink, 1).await;
        assert_eq!(sink.emissions(), vec!["kept"]);
        channel.cancel().await;
    }

    #[tokio::test]
    async fn test_other_actions_are_ignored() {
        let (bus, bridge) = bridge();
        let channel = bridge.channel();
        let sink = CollectSink::new();

        channel.listen(sink.clone()).await.unwrap();
        bus.send(Broadcast::new("com.regrip.OTHER").with_extra("log_data", "ignored"));
        bus.send(log_broadcast("kept"));

        wait_for_count(&sink, 1).await;
        assert_eq!(sink.emissions(), vec!["kept"]);
        channel.cancel().await;
    }

    #[tokio::test]
    async fn test_no_emissions_before_listen() {
        let (bus, bridge) = bridge();
        let channel = bridge.channel();
        let sink = CollectSink::new();

        bus.send(log_broadcast("too-early"));
        channel.listen(sink.clone()).await.unwrap();
        bus.send(log_broadcast("on-time"));

        wait_for_count(&sink, 1).await;
        assert_eq!(sink.emissions(), vec!["on-time"]);
        channel.cancel().await;
    }

    #[tokio::test]
    async fn test_no_emissions_after_cancel_returns() {
        let (bus, bridge) = bridge();
        let channel = bridge.channel();
        let sink = CollectSink::new();

        channel.listen(sink.clone()).await.unwrap();
        bus.send(log_broadcast("before"));
        wait_for_count(&sink, 1).await;

        channel.cancel().await;
        bus.send(log_broadcast("after"));
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(sink.emissions(), vec!["before"]);
        assert!(!bridge.is_listening().await);
    }

    #[tokio::test]
    async fn test_double_cancel_is_safe() {
        let (_bus, bridge) = bridge();
        let channel = bridge.channel();
        let sink = CollectSink::new();

        channel.listen(sink).await.unwrap();
        channel.cancel().await;
        channel.cancel().await;
        assert!(!bridge.is_listening().await);
    }

    #[tokio::test]
    async fn test_cancel_without_listen_is_noop() {
        let (_bus, bridge) = bridge();
        let channel = bridge.channel();
        channel.cancel().await;
        assert!(!bridge.is_listening().await);
    }

    #[tokio::test]
    async fn test_listen_then_immediate_cancel_yields_nothing() {
        let (_bus, bridge) = bridge();
        let channel = bridge.channel();
        let sink = CollectSink::new();

        channel.listen(sink.clone()).await.unwrap();
        assert!(bridge.is_listening().await);
        channel.cancel().await;

        assert!(sink.emissions().is_empty());
        assert!(!bridge.is_listening().await);
    }

    #[tokio::test]
    async fn test_two_cycles_are_independent() {
        let (bus, bridge) = bridge();
        let channel = bridge.channel();

        for cycle in 0..2 {
            let sink = CollectSink::new();
            channel.listen(sink.clone()).await.unwrap();
            bus.send(log_broadcast(&format!("cycle-{cycle}")));
            wait_for_count(&sink, 1).await;
            channel.cancel().await;

            assert_eq!(sink.emissions(), vec![format!("cycle-{cycle}")]);
        }
        assert!(!bridge.is_listening().await);
    }

    #[tokio::test]
    async fn test_double_listen_is_rejected_and_keeps_active_subscription() {
        let (bus, bridge) = bridge();
        let channel = bridge.channel();
        let first = CollectSink::new();
        let second = CollectSink::new();

        channel.listen(first.clone()).await.unwrap();
        let err = channel.listen(second.clone()).await.unwrap_err();
        assert!(matches!(err, BridgeError::AlreadyListening));

        bus.send(log_broadcast("still-first"));
        wait_for_count(&first, 1).await;
        assert_eq!(first.emissions(), vec!["still-first"]);
        assert!(second.emissions().is_empty());
        channel.cancel().await;
    }

    #[tokio::test]
    async fn test_listen_uses_legacy_registration_on_older_platform() {
        let (bus, bridge) = bridge_on(Platform::new(RECEIVER_VISIBILITY_LEVEL - 1));
        let channel = bridge.channel();
        let sink = CollectSink::new();

        channel.listen(sink.clone()).await.unwrap();
        bus.send(log_broadcast("legacy-path"));

        wait_for_count(&sink, 1).await;
        assert_eq!(sink.emissions(), vec!["legacy-path"]);
        channel.cancel().await;
    }

    #[tokio::test]
    async fn test_channel_is_named_from_config() {
        let (_bus, bridge) = bridge();
        assert_eq!(bridge.channel().name(), "com.regrip.logs/receiver");
    }
}
