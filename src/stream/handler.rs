//! # Subscribe/unsubscribe contract for stream producers.
//!
//! Provides [`StreamHandler`] the lifecycle seam an [`EventChannel`]
//! drives. A producer implements `on_listen`/`on_cancel`; the channel
//! delegates consumer attach/detach to them.
//!
//! [`EventChannel`]: crate::stream::EventChannel

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BridgeError;
use crate::stream::EventSink;

/// Producer-side lifecycle for one outgoing event stream.
///
/// ### Rules
/// - `on_listen` starts producing into the given sink; it fails if the
///   producer cannot accept another subscription.
/// - `on_cancel` stops producing; it is idempotent, and once it returns the
///   sink observes nothing further.
#[async_trait]
pub trait StreamHandler: Send + Sync + 'static {
    /// Starts the subscription, producing into `sink`.
    async fn on_listen(&self, sink: Arc<dyn EventSink>) -> Result<(), BridgeError>;

    /// Ends the subscription. Safe to call when none is active.
    async fn on_cancel(&self);
}
