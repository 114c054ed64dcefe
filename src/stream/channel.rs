//! # Named binding between a stream producer and its consumer.
//!
//! An [`EventChannel`] pairs a channel name with one [`StreamHandler`]. The
//! external consumer only sees the channel: it attaches with
//! [`EventChannel::listen`] and detaches with [`EventChannel::cancel`]; the
//! channel delegates both to the handler, which owns the actual lifecycle
//! state.
//!
//! One consumer at a time: the handler enforces it by rejecting a second
//! `listen` while one is active.

use std::sync::Arc;

use crate::error::BridgeError;
use crate::stream::{EventSink, StreamHandler};

/// Named subscribe/unsubscribe conduit for one external consumer.
pub struct EventChannel {
    name: Arc<str>,
    handler: Arc<dyn StreamHandler>,
}

impl EventChannel {
    /// Binds `handler` to a channel with the given name.
    pub fn new(name: impl Into<Arc<str>>, handler: Arc<dyn StreamHandler>) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }

    /// Returns the channel name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches a consumer: subsequent produced values land in `sink`.
    ///
    /// Fails with [`BridgeError::AlreadyListening`] if a consumer is already
    /// attached.
    pub async fn listen(&self, sink: Arc<dyn EventSink>) -> Result<(), BridgeError> {
        self.handler.on_listen(sink).await
    }

    /// Detaches the consumer, if any. Idempotent; once this returns, the
    /// sink observes nothing further.
    pub async fn cancel(&self) {
        self.handler.on_cancel().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    struct Null;

    #[async_trait]
    impl EventSink for Null {
        async fn success(&self, _value: String) {}
    }

    #[derive(Default)]
    struct CountingHandler {
        listens: AtomicUsize,
        cancels: AtomicUsize,
    }

    #[async_trait]
    impl StreamHandler for CountingHandler {
        async fn on_listen(&self, _sink: Arc<dyn EventSink>) -> Result<(), BridgeError> {
            self.listens.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn on_cancel(&self) {
            self.cancels.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_channel_delegates_to_handler() {
        let handler = Arc::new(CountingHandler::default());
        let channel = EventChannel::new("demo/stream", handler.clone());
        assert_eq!(channel.name(), "demo/stream");

        channel.listen(Arc::new(Null)).await.unwrap();
        channel.cancel().await;
        channel.cancel().await;

        assert_eq!(handler.listens.load(Ordering::SeqCst), 1);
        assert_eq!(handler.cancels.load(Ordering::SeqCst), 2);
    }
}
