//! # Downstream sink for stream emissions.
//!
//! Provides [`EventSink`] the seam between the bridge and the external
//! consumer. Whatever sits behind the sink (a UI-layer channel, a test
//! collector, a stdout printer) receives one value per call, in emission
//! order.
//!
//! ## Rules
//! - `success` is invoked from the delivery worker's context, one call at a
//!   time per subscription, in delivery order.
//! - `error` exists for parity with the stream-channel contract; the log
//!   bridge never calls it (malformed broadcasts are dropped, not surfaced).

use async_trait::async_trait;

/// Consumer-side sink accepting produced values or error signals.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally; do not panic.
#[async_trait]
pub trait EventSink: Send + Sync + 'static {
    /// Accepts one successfully produced value.
    async fn success(&self, value: String);

    /// Signals a stream error to the consumer.
    ///
    /// The default implementation ignores it; sinks backing consumers with
    /// a real error surface should override this.
    async fn error(&self, code: &str, message: &str) {
        let _ = (code, message);
    }
}
