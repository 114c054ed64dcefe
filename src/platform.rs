//! # Platform capability for receiver registration.
//!
//! Provides [`Platform`] a value describing the host OS release the bridge
//! runs on, reduced to the one capability that matters for registration:
//! whether runtime-registered receivers must declare an explicit
//! [`Visibility`](crate::broadcasts::Visibility).
//!
//! ## Rules
//! - The capability is resolved **once**, at registration time, as a plain
//!   conditional branch. There is no polymorphism over platform versions.
//! - At or above [`RECEIVER_VISIBILITY_LEVEL`], the legacy registration
//!   signature is rejected; callers must pass an explicit visibility flag.
//! - Below the threshold, the legacy signature is the only one the host
//!   accepted historically, so the flag is simply carried as metadata.
//!
//! ## Example
//! ```rust
//! use logbridge::{Platform, RECEIVER_VISIBILITY_LEVEL};
//!
//! let old = Platform::new(RECEIVER_VISIBILITY_LEVEL - 1);
//! assert!(!old.requires_receiver_visibility());
//!
//! let new = Platform::new(RECEIVER_VISIBILITY_LEVEL);
//! assert!(new.requires_receiver_visibility());
//! ```

/// First API level that enforces an explicit visibility declaration for
/// receivers registered at runtime.
pub const RECEIVER_VISIBILITY_LEVEL: u32 = 33;

/// Host platform description, reduced to its API level.
///
/// Cheap to copy; the bus holds one and consults it on every registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Platform {
    /// Numeric API level of the host OS release.
    pub api_level: u32,
}

impl Platform {
    /// Creates a platform description for the given API level.
    #[inline]
    pub const fn new(api_level: u32) -> Self {
        Self { api_level }
    }

    /// Returns `true` if runtime receiver registration on this platform
    /// must declare an explicit visibility flag.
    #[inline]
    pub const fn requires_receiver_visibility(&self) -> bool {
        self.api_level >= RECEIVER_VISIBILITY_LEVEL
    }
}

impl Default for Platform {
    /// Defaults to the oldest release that enforces receiver visibility,
    /// so the stricter registration path is exercised unless a caller
    /// explicitly opts into a legacy level.
    fn default() -> Self {
        Self::new(RECEIVER_VISIBILITY_LEVEL)
    }
}
