//! # Live listener handle for a registered receiver.
//!
//! A [`Registration`] is returned by the bus when a receiver is registered
//! and must be retained to later deregister it. It exclusively owns the
//! dispatch worker that pulls broadcasts off the bus, applies the filter,
//! and invokes the receiver.
//!
//! ## Architecture
//! ```text
//! SystemBus ──► [broadcast receiver] ──► dispatch worker ──► receiver.on_broadcast()
//!                                             │                    └─► panic caught, delivery lost
//!                                             └◄── CancellationToken (unregister / drop)
//! ```
//!
//! ## Rules
//! - **Exclusive ownership**: nothing else can observe or tear down the
//!   worker; [`Registration::unregister`] consumes the handle, so a second
//!   deregistration is unrepresentable.
//! - **Sequential delivery**: one worker per registration; the receiver sees
//!   broadcasts one at a time, in bus order.
//! - **Quiescent teardown**: `unregister` cancels the worker and awaits it;
//!   after it returns, no further deliveries occur.
//! - **Drop safety**: dropping the handle cancels the worker without
//!   awaiting it; deliveries stop promptly but not synchronously. Use
//!   `unregister` when the caller needs the stronger guarantee.
//!
//! ## Panic handling
//! The worker wraps each delivery in `catch_unwind`:
//! - the panicking delivery is lost for this registration only,
//! - the worker continues with the next broadcast.

use std::sync::Arc;

use futures::FutureExt;
use tokio::{sync::broadcast, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::broadcasts::{Broadcast, BroadcastFilter, Receive};

/// Declared reachability of a registered receiver.
///
/// At or above the visibility-enforcing API level every runtime
/// registration must state whether the receiver is reachable from outside
/// the owning process; below it, the legacy signature implied `Exported`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Receiver accepts broadcasts originating outside the owning process.
    Exported,
    /// Receiver only accepts broadcasts from the owning process.
    NotExported,
}

/// Live registration handle; owns the dispatch worker exclusively.
#[derive(Debug)]
pub struct Registration {
    name: &'static str,
    visibility: Visibility,
    stop: CancellationToken,
    worker: Option<JoinHandle<()>>,
}

impl Registration {
    /// Spawns the dispatch worker for a freshly registered receiver.
    pub(crate) fn spawn(
        rx: broadcast::Receiver<Broadcast>,
        receiver: Arc<dyn Receive>,
        filter: BroadcastFilter,
        visibility: Visibility,
    ) -> Self {
        let stop = CancellationToken::new();
        let token = stop.clone();
        let name = receiver.name();
        let worker = tokio::spawn(dispatch(rx, receiver, filter, token));

        Self {
            name,
            visibility,
            stop,
            worker: Some(worker),
        }
    }

    /// Returns the registered receiver's name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the visibility this receiver was registered with.
    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Deregisters the receiver.
    ///
    /// Cancels the dispatch worker and awaits its termination: an in-flight
    /// delivery is allowed to finish, and once this returns the receiver is
    /// guaranteed to observe nothing further.
    pub async fn unregister(mut self) {
        self.stop.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.await;
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.stop.cancel();
    }
}

/// Worker loop: pull, filter, deliver, until cancelled or the bus closes.
async fn dispatch(
    mut rx: broadcast::Receiver<Broadcast>,
    receiver: Arc<dyn Receive>,
    filter: BroadcastFilter,
    stop: CancellationToken,
) {
    loop {
        let broadcast = tokio::select! {
            _ = stop.cancelled() => break,
            next = rx.recv() => match next {
                Ok(b) => b,
                // Lagged: the ring buffer overwrote items this worker had
                // not consumed yet; skip them and keep going.
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            },
        };

        if !filter.matches(&broadcast) {
            continue;
        }

        let delivery = receiver.on_broadcast(&broadcast);
        // A panicking receiver loses this delivery only; the worker keeps
        // draining the channel.
        let _ = std::panic::AssertUnwindSafe(delivery).catch_unwind().await;
    }
}
