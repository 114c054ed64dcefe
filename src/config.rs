//! # Bridge wiring configuration.
//!
//! Provides [`BridgeConfig`] the names that tie the bridge to its two
//! endpoints: the broadcast action it listens for, the extra key holding the
//! log payload, and the stream channel name exposed to the consumer.
//!
//! Config is used in two ways:
//! 1. **Bridge creation**: `LogBridge::new(bus, config)`
//! 2. **Channel naming**: `LogBridge::channel()` names the stream after
//!    [`BridgeConfig::channel`]

use std::sync::Arc;

/// Wiring names for a log bridge.
///
/// ## Field semantics
/// - `action`: broadcast action the bridge's receiver is scoped to; any
///   broadcast with a different action is never delivered to the bridge
/// - `payload_key`: extra key read from each matching broadcast; broadcasts
///   without this key produce no emission
/// - `channel`: name of the outgoing stream channel the consumer attaches to
///
/// ## Notes
/// All fields are public for flexibility; `Default` carries the canonical
/// wiring used by the log relay deployment.
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Broadcast action to listen for.
    pub action: Arc<str>,

    /// Extra key carrying the log payload.
    pub payload_key: Arc<str>,

    /// Name of the outgoing stream channel.
    pub channel: Arc<str>,
}

impl Default for BridgeConfig {
    /// Default configuration:
    ///
    /// - `action = "com.regrip.LOG_BROADCAST"`
    /// - `payload_key = "log_data"`
    /// - `channel = "com.regrip.logs/receiver"`
    fn default() -> Self {
        Self {
            action: Arc::from("com.regrip.LOG_BROADCAST"),
            payload_key: Arc::from("log_data"),
            channel: Arc::from("com.regrip.logs/receiver"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wiring() {
        let cfg = BridgeConfig::default();
        assert_eq!(&*cfg.action, "com.regrip.LOG_BROADCAST");
        assert_eq!(&*cfg.payload_key, "log_data");
        assert_eq!(&*cfg.channel, "com.regrip.logs/receiver");
    }
}
