//! Booking record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gearbook_core::BookingId;

/// A successful reservation.
///
/// Created only by `reserve`, destroyed only by `release`; immutable in
/// between. The identifier comes from the store's monotonic counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    /// Name of the reserved device; always a key of the stock ledger.
    pub device_name: String,
    /// Quantity reserved, at least 1.
    pub count: u32,
    /// Caller-supplied owner, non-blank.
    pub owner: String,
    pub created_at: DateTime<Utc>,
}
