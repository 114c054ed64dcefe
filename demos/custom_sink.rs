//! # Example: custom_sink
//!
//! Demonstrates how to implement [`EventSink`] for your own consumer and
//! how the one-subscription lifecycle behaves.
//!
//! Shows how to:
//! - Implement the [`EventSink`] trait.
//! - Handle the [`BridgeError::AlreadyListening`] rejection.
//! - Run two listen/cancel cycles on the same bridge.
//!
//! ## Flow
//! ```text
//! cycle 1: listen(CountingSink) ──► send ──► cancel
//!          listen again while active ──► AlreadyListening
//! cycle 2: listen(CountingSink) ──► send ──► cancel
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example custom_sink
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use logbridge::{Broadcast, BridgeConfig, EventSink, LogBridge, Platform, SystemBus};

/// A sink that numbers every line it receives.
/// In real life, this would feed a UI channel, a file, or a socket.
struct CountingSink {
    lines: AtomicUsize,
}

#[async_trait]
impl EventSink for CountingSink {
    async fn success(&self, value: String) {
        let n = self.lines.fetch_add(1, Ordering::SeqCst) + 1;
        println!("{n:>3} | {value}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = SystemBus::new(Platform::default(), 256);
    let bridge = Arc::new(LogBridge::new(bus.clone(), BridgeConfig::default()));
    let channel = bridge.channel();

    for cycle in 1..=2 {
        println!("-- cycle {cycle} --");
        let sink = Arc::new(CountingSink {
            lines: AtomicUsize::new(0),
        });
        channel.listen(sink).await?;

        if cycle == 1 {
            // A second consumer must wait for the first to cancel.
            let rejected = channel
                .listen(Arc::new(CountingSink {
                    lines: AtomicUsize::new(0),
                }))
                .await;
            if let Err(err) = rejected {
                println!("second listen rejected: {}", err.as_label());
            }
        }

        bus.send(Broadcast::new("com.regrip.LOG_BROADCAST").with_extra("log_data", "hello"));
        bus.send(Broadcast::new("com.regrip.LOG_BROADCAST").with_extra("log_data", "world"));

        tokio::time::sleep(Duration::from_millis(50)).await;
        channel.cancel().await;
    }
    Ok(())
}
