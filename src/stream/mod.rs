//! Outgoing event stream: sink, handler contract, and named channel.
//!
//! This module is the consumer-facing half of the bridge.
//!
//! ## Architecture
//! ```text
//! Value flow:
//!   producer ── sink.success(value) ──► EventSink (consumer side)
//!
//! Lifecycle:
//!   consumer ──► EventChannel::listen(sink) ──► StreamHandler::on_listen
//!   consumer ──► EventChannel::cancel()     ──► StreamHandler::on_cancel
//! ```
//!
//! ## Contents
//! - [`EventSink`] consumer-side sink accepting values or error signals
//! - [`StreamHandler`] producer-side subscribe/unsubscribe contract
//! - [`EventChannel`] named binding driving one handler for one consumer
//! - [`LogPrinter`] stdout sink (feature `logging`)

mod channel;
mod handler;
mod sink;

pub use channel::EventChannel;
pub use handler::StreamHandler;
pub use sink::EventSink;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogPrinter;
