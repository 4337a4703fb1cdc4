//! Registry error model.

use thiserror::Error;

use crate::id::BookingId;

/// Result type used across the registry.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-level error.
///
/// The taxonomy is exhaustive: every failure a caller can observe is one of
/// these three kinds, reported synchronously and never recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Malformed request input (non-positive count, blank owner or device
    /// name). Caller-correctable; never worth retrying as-is.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Device unknown, or insufficient remaining stock for the requested
    /// count. Retryable only when caused by stock exhaustion.
    #[error("device not available: {0}")]
    DeviceNotAvailable(String),

    /// Release or lookup referencing a non-existent or already-released
    /// booking identifier.
    #[error("booking {0} not found")]
    BookingNotFound(BookingId),
}

impl RegistryError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn device_not_available(msg: impl Into<String>) -> Self {
        Self::DeviceNotAvailable(msg.into())
    }

    pub fn booking_not_found(id: BookingId) -> Self {
        Self::BookingNotFound(id)
    }
}
