//! # logbridge
//!
//! **Logbridge** is a lightweight broadcast-to-stream relay library for Rust.
//!
//! It bridges a process-wide broadcast plane into per-consumer event
//! streams with a strict subscribe/unsubscribe lifecycle. The crate is
//! designed as the glue between a system that emits log broadcasts and a
//! UI layer that consumes them as a stream.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   senders (any number)
//!        │ send(Broadcast{action, extras})
//!        ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  SystemBus (broadcast hub)                                │
//! │  - bounded ring buffer, non-blocking send                 │
//! │  - platform-gated receiver registration                   │
//! └──────────────┬────────────────────────────────────────────┘
//!                ▼ (created on listen, torn down on cancel)
//!        ┌──────────────────┐
//!        │   Registration   │  filter: action == cfg.action
//!        │ (dispatch worker)│  panic-isolated, sequential
//!        └────────┬─────────┘
//!                 ▼ extra(cfg.payload_key) present?
//!        ┌──────────────────┐
//!        │    LogBridge     │──── absent: dropped
//!        └────────┬─────────┘
//!                 ▼ present
//!        ┌──────────────────┐
//!        │    EventSink     │  consumer side of EventChannel
//!        └──────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! EventChannel::listen(sink) ──► LogBridge::on_listen
//!   ├─► reject if already Listening (AlreadyListening)
//!   ├─► platform.requires_receiver_visibility()?
//!   │     ├─ yes ─► bus.register_with_visibility(.., Exported)
//!   │     └─ no  ─► bus.register(..)            (legacy signature)
//!   └─► store Registration            Idle ──► Listening
//!
//! EventChannel::cancel() ──► LogBridge::on_cancel
//!   ├─► take Registration (None → no-op)
//!   └─► unregister: cancel worker, await it
//!                                     Listening ──► Idle
//!       (after cancel returns, the sink observes nothing further)
//! ```
//!
//! ## Features
//! | Area             | Description                                             | Key types / traits                  |
//! |------------------|---------------------------------------------------------|-------------------------------------|
//! | **Broadcasts**   | Send and observe process-wide notifications.            | [`Broadcast`], [`SystemBus`]        |
//! | **Registration** | Filtered runtime listeners with owned teardown handles. | [`Registration`], [`Receive`]       |
//! | **Streaming**    | Consumer-facing channel with one subscriber at a time.  | [`EventChannel`], [`EventSink`]     |
//! | **Bridging**     | Relay one broadcast extra into one stream.              | [`LogBridge`], [`BridgeConfig`]     |
//! | **Platform**     | Version-conditional registration signature.             | [`Platform`], [`Visibility`]        |
//! | **Errors**       | Typed lifecycle errors.                                 | [`BridgeError`]                     |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogPrinter`] sink _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use logbridge::{
//!     Broadcast, BridgeConfig, EventSink, LogBridge, Platform, SystemBus,
//! };
//!
//! struct Stdout;
//!
//! #[async_trait]
//! impl EventSink for Stdout {
//!     async fn success(&self, value: String) {
//!         println!("{value}");
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bus = SystemBus::new(Platform::default(), 256);
//!     let bridge = Arc::new(LogBridge::new(bus.clone(), BridgeConfig::default()));
//!     let channel = bridge.channel();
//!
//!     channel.listen(Arc::new(Stdout)).await?;
//!     bus.send(
//!         Broadcast::new("com.regrip.LOG_BROADCAST")
//!             .with_extra("log_data", "ERROR: disk full"),
//!     );
//!     tokio::task::yield_now().await;
//!     channel.cancel().await;
//!     Ok(())
//! }
//! ```

mod bridge;
mod broadcasts;
mod config;
mod error;
mod platform;
mod stream;

// ---- Public re-exports ----

pub use bridge::LogBridge;
pub use broadcasts::{Broadcast, BroadcastFilter, Receive, Registration, SystemBus, Visibility};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use platform::{Platform, RECEIVER_VISIBILITY_LEVEL};
pub use stream::{EventChannel, EventSink, StreamHandler};

// Optional: expose a simple built-in stdout sink (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use stream::LogPrinter;
