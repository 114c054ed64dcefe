//! System broadcast plane: data model, hub, and listener lifecycle.
//!
//! This module groups the broadcast **data model** and the **bus** used to
//! send broadcasts and register filtered receivers at runtime.
//!
//! ## Contents
//! - [`Broadcast`] one notification: action plus named string extras
//! - [`BroadcastFilter`] any-of action matcher scoping a registration
//! - [`SystemBus`] thin wrapper over `tokio::sync::broadcast` with
//!   platform-gated registration
//! - [`Receive`] delivery callback trait for registered listeners
//! - [`Registration`] live listener handle; [`Visibility`] the declared
//!   reachability of a registered receiver
//!
//! ## Quick reference
//! - **Senders**: anything holding a `SystemBus` clone.
//! - **Consumers**: `Registration` dispatch workers, which invoke
//!   [`Receive::on_broadcast`]; the log bridge registers one such receiver
//!   per active stream subscription.

mod broadcast;
mod bus;
mod filter;
mod receiver;
mod registration;

pub use broadcast::Broadcast;
pub use bus::SystemBus;
pub use filter::BroadcastFilter;
pub use receiver::Receive;
pub use registration::{Registration, Visibility};
