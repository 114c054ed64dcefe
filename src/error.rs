//! Error types used by the logbridge runtime.
//!
//! The bridge is deliberately close to error-free: malformed broadcasts are
//! dropped rather than surfaced, and teardown is idempotent. What remains is
//! [`BridgeError`] — violations of the subscription lifecycle or of the
//! platform's registration contract.
//!
//! The type provides helper methods (`as_label`, `as_message`) for
//! logging/metrics.

use thiserror::Error;

/// # Errors produced by the bridge and the broadcast plane.
///
/// These represent misuse of the lifecycle contract, not delivery failures:
/// delivery has no error path by design (a broadcast without the expected
/// payload is silently dropped).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A listen request arrived while a subscription was already active.
    ///
    /// The active subscription is left undisturbed; the caller must cancel
    /// it before listening again.
    #[error("stream is already being listened to")]
    AlreadyListening,

    /// The legacy registration signature was used on a platform that
    /// requires an explicit receiver visibility declaration.
    #[error("api level {api_level} requires an explicit receiver visibility flag")]
    VisibilityRequired {
        /// API level of the platform that rejected the registration.
        api_level: u32,
    },
}

impl BridgeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use logbridge::BridgeError;
    ///
    /// let err = BridgeError::AlreadyListening;
    /// assert_eq!(err.as_label(), "already_listening");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BridgeError::AlreadyListening => "already_listening",
            BridgeError::VisibilityRequired { .. } => "visibility_required",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BridgeError::AlreadyListening => "stream is already being listened to".to_string(),
            BridgeError::VisibilityRequired { api_level } => {
                format!("api level {api_level} requires an explicit receiver visibility flag")
            }
        }
    }
}
