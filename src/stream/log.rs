//! # Simple stdout sink for debugging and demos.
//!
//! [`LogPrinter`] prints every relayed value to stdout in a human-readable
//! format. This is primarily useful for development, debugging, and
//! examples.
//!
//! ## Output format
//! ```text
//! [log] ERROR: disk full
//! [stream-error] code=conn message="connection refused"
//! ```
//!
//! ## Example
//! ```no_run
//! # use std::sync::Arc;
//! # use logbridge::{EventSink, LogPrinter};
//! let sink: Arc<dyn EventSink> = Arc::new(LogPrinter);
//! // pass to EventChannel::listen; relayed lines go to stdout
//! ```

use async_trait::async_trait;

use crate::stream::EventSink;

/// Simple stdout logging sink.
///
/// Enabled via the `logging` feature. Prints relayed values to stdout for
/// debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`EventSink`] that
/// feeds your actual consumer.
pub struct LogPrinter;

#[async_trait]
impl EventSink for LogPrinter {
    async fn success(&self, value: String) {
        println!("[log] {value}");
    }

    async fn error(&self, code: &str, message: &str) {
        println!("[stream-error] code={code} message={message:?}");
    }
}
