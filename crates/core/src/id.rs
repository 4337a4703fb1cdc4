//! Strongly-typed identifiers used across the registry.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Identifier of a booking.
///
/// Issued by the store from a monotonic counter; unique among live bookings
/// for the process lifetime and immutable once assigned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for BookingId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for BookingId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<BookingId> for u64 {
    fn from(value: BookingId) -> Self {
        value.0
    }
}

impl FromStr for BookingId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = u64::from_str(s)
            .map_err(|e| RegistryError::invalid_parameter(format!("BookingId: {e}")))?;
        Ok(Self(raw))
    }
}
