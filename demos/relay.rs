//! # Example: relay
//!
//! Demonstrates the end-to-end path: broadcasts sent on the bus come out of
//! the stream channel as plain strings.
//!
//! Shows how to:
//! - Build a [`SystemBus`] and a [`LogBridge`].
//! - Attach the built-in [`LogPrinter`] sink via [`EventChannel::listen`].
//! - Observe that payload-less broadcasts are dropped.
//!
//! ## Flow
//! ```text
//! main ──► channel.listen(LogPrinter)
//!   ├─► bus.send(LOG_BROADCAST + log_data)   → printed
//!   ├─► bus.send(LOG_BROADCAST, no extras)   → dropped
//!   └─► channel.cancel()
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`LogPrinter`].
//! ```bash
//! cargo run --example relay --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use logbridge::{Broadcast, BridgeConfig, LogBridge, LogPrinter, Platform, SystemBus};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = SystemBus::new(Platform::default(), 256);
    let bridge = Arc::new(LogBridge::new(bus.clone(), BridgeConfig::default()));
    let channel = bridge.channel();

    println!("listening on {}", channel.name());
    channel.listen(Arc::new(LogPrinter)).await?;

    bus.send(Broadcast::new("com.regrip.LOG_BROADCAST").with_extra("log_data", "boot complete"));
    bus.send(Broadcast::new("com.regrip.LOG_BROADCAST").with_extra("log_data", "ERROR: disk full"));
    // No payload extra: relayed nowhere, by design.
    bus.send(Broadcast::new("com.regrip.LOG_BROADCAST"));
    // Different action: the bridge's filter never sees it.
    bus.send(Broadcast::new("com.regrip.OTHER").with_extra("log_data", "not for us"));

    tokio::time::sleep(Duration::from_millis(50)).await;
    channel.cancel().await;
    println!("cancelled; bridge is idle again");
    Ok(())
}
