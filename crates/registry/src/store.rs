//! Reservation store implementations.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use chrono::Utc;

use gearbook_core::{BookingId, RegistryError, RegistryResult};
use gearbook_specs::SpecProvider;

use crate::booking::Booking;
use crate::catalog::seed_catalog;
use crate::device::Device;
use crate::validate;

/// Reservation store abstraction.
pub trait ReservationStore: Send + Sync {
    /// Reserve `count` units of a device for `owner`, returning the new
    /// booking identifier. Check-then-decrement-then-insert is atomic: under
    /// concurrent calls no two reservations can together consume more stock
    /// than remained.
    fn reserve(&self, device_name: &str, count: u32, owner: &str) -> RegistryResult<BookingId>;

    /// Remove a booking and return its quantity to the ledger. Releasing the
    /// same identifier twice fails with `BookingNotFound` on the second call.
    fn release(&self, booking_id: BookingId) -> RegistryResult<()>;

    /// Snapshot of every catalog entry, decorated with tech specs. Not a
    /// live view: later mutations never affect an already-returned listing.
    fn list_devices(&self) -> Vec<Device>;

    /// Snapshot copy of all live bookings.
    fn list_bookings(&self) -> Vec<Booking>;

    /// Get a booking by identifier.
    fn get_booking(&self, booking_id: BookingId) -> RegistryResult<Booking>;
}

/// Both maps behind one lock so reserve/release mutate them as a unit.
#[derive(Debug)]
struct RegistryState {
    /// Device name to remaining reservable count.
    ledger: HashMap<String, u32>,
    /// Live bookings by identifier.
    bookings: HashMap<BookingId, Booking>,
}

/// In-memory reservation store.
///
/// Readers (`list_*`, `get_booking`) share the lock; writers (`reserve`,
/// `release`) take it exclusively. Critical sections are map lookups and
/// single-entry updates only; spec fetches happen with no lock held.
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
    next_id: AtomicU64,
    specs: Arc<dyn SpecProvider>,
}

impl InMemoryRegistry {
    /// Build a registry seeded from the fixed catalog.
    pub fn new(specs: Arc<dyn SpecProvider>) -> Self {
        Self::with_catalog(seed_catalog(), specs)
    }

    /// Build a registry with an explicit catalog (tests, alternate seeds).
    pub fn with_catalog(catalog: HashMap<String, u32>, specs: Arc<dyn SpecProvider>) -> Self {
        Self {
            state: RwLock::new(RegistryState {
                ledger: catalog,
                bookings: HashMap::new(),
            }),
            next_id: AtomicU64::new(1),
            specs,
        }
    }

    pub fn arc(specs: Arc<dyn SpecProvider>) -> Arc<Self> {
        Arc::new(Self::new(specs))
    }

    /// Remaining reservable count for a device, if it is in the catalog.
    pub fn remaining(&self, device_name: &str) -> Option<u32> {
        let state = self.state.read().unwrap();
        state.ledger.get(device_name).copied()
    }
}

impl ReservationStore for InMemoryRegistry {
    fn reserve(&self, device_name: &str, count: u32, owner: &str) -> RegistryResult<BookingId> {
        // Shape checks need no ledger state, so they run lock-free.
        validate::validate_reservation(device_name, count, owner)?;

        let mut state = self.state.write().unwrap();
        let remaining = state.ledger.get_mut(device_name).ok_or_else(|| {
            RegistryError::device_not_available(format!("device {device_name} not found"))
        })?;
        if *remaining < count {
            return Err(RegistryError::device_not_available(format!(
                "device {device_name}: requested {count}, remaining {remaining}"
            )));
        }
        *remaining -= count;

        let id = BookingId::from_raw(self.next_id.fetch_add(1, Ordering::Relaxed));
        state.bookings.insert(
            id,
            Booking {
                id,
                device_name: device_name.to_string(),
                count,
                owner: owner.to_string(),
                created_at: Utc::now(),
            },
        );
        tracing::debug!(booking_id = %id, device = device_name, count, "reserved");
        Ok(id)
    }

    fn release(&self, booking_id: BookingId) -> RegistryResult<()> {
        let mut state = self.state.write().unwrap();
        let booking = state
            .bookings
            .remove(&booking_id)
            .ok_or(RegistryError::BookingNotFound(booking_id))?;
        let remaining = state.ledger.entry(booking.device_name.clone()).or_insert(0);
        *remaining += booking.count;
        tracing::debug!(booking_id = %booking_id, device = %booking.device_name, count = booking.count, "released");
        Ok(())
    }

    fn list_devices(&self) -> Vec<Device> {
        let snapshot: Vec<(String, u32)> = {
            let state = self.state.read().unwrap();
            state
                .ledger
                .iter()
                .map(|(name, remaining)| (name.clone(), *remaining))
                .collect()
        };

        // Spec fetches may block on IO; the guard is dropped before any of
        // them run, and availability reflects the snapshot above.
        snapshot
            .into_iter()
            .map(|(name, remaining)| Device {
                available: remaining > 0,
                tech_specs: self.specs.fetch_tech_specs(&name),
                name,
            })
            .collect()
    }

    fn list_bookings(&self) -> Vec<Booking> {
        let state = self.state.read().unwrap();
        state.bookings.values().cloned().collect()
    }

    fn get_booking(&self, booking_id: BookingId) -> RegistryResult<Booking> {
        let state = self.state.read().unwrap();
        state
            .bookings
            .get(&booking_id)
            .cloned()
            .ok_or(RegistryError::BookingNotFound(booking_id))
    }
}

impl ReservationStore for Arc<InMemoryRegistry> {
    fn reserve(&self, device_name: &str, count: u32, owner: &str) -> RegistryResult<BookingId> {
        (**self).reserve(device_name, count, owner)
    }

    fn release(&self, booking_id: BookingId) -> RegistryResult<()> {
        (**self).release(booking_id)
    }

    fn list_devices(&self) -> Vec<Device> {
        (**self).list_devices()
    }

    fn list_bookings(&self) -> Vec<Booking> {
        (**self).list_bookings()
    }

    fn get_booking(&self, booking_id: BookingId) -> RegistryResult<Booking> {
        (**self).get_booking(booking_id)
    }
}
