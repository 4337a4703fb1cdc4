//! Device reservation registry.
//!
//! Tracks a fixed catalog of device types with integer stock counts, lets
//! callers reserve stock under a unique booking identifier, release a prior
//! booking, and query availability and booking records. All state is
//! in-memory and lost on process exit.

pub mod booking;
pub mod catalog;
pub mod device;
pub mod store;
pub mod validate;

pub use booking::Booking;
pub use catalog::seed_catalog;
pub use device::Device;
pub use store::{InMemoryRegistry, ReservationStore};
