//! # Delivery callback for registered listeners.
//!
//! Provides [`Receive`] the extension point invoked for every broadcast a
//! registration observes.
//!
//! Each registration gets:
//! - **Dedicated dispatch worker** (runs independently of the sender)
//! - **Sequential delivery** (broadcasts arrive one at a time, in order)
//! - **Panic isolation** (a panicking receiver does not kill the worker)
//!
//! ## Rules
//! - `on_broadcast` is called from the registration's worker task, never
//!   from the sender's context.
//! - A slow receiver only delays its own registration; the bus and other
//!   registrations are unaffected.
//! - Broadcasts the filter rejects are never seen by the receiver.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use logbridge::{Broadcast, Receive};
//!
//! struct Counter;
//!
//! #[async_trait]
//! impl Receive for Counter {
//!     async fn on_broadcast(&self, broadcast: &Broadcast) {
//!         // inspect broadcast.extra(...), update state, etc.
//!         let _ = broadcast;
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//! ```

use async_trait::async_trait;

use crate::broadcasts::Broadcast;

/// Receiver callback for broadcasts observed by a registration.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally; do not panic. Panics are caught and the
///   worker moves on to the next broadcast, but the panicking delivery is
///   lost.
#[async_trait]
pub trait Receive: Send + Sync + 'static {
    /// Processes a single broadcast.
    ///
    /// Called from the registration's dispatch worker, sequentially and in
    /// bus-delivery order.
    async fn on_broadcast(&self, broadcast: &Broadcast);

    /// Returns the receiver name used in diagnostics.
    ///
    /// Prefer short, descriptive names. The default uses
    /// `type_name::<Self>()`, which can be verbose - override it when
    /// possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
