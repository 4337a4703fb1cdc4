//! `gearbook-core` — registry foundation building blocks.
//!
//! This crate contains the error taxonomy and strongly-typed identifiers
//! shared across the registry (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{RegistryError, RegistryResult};
pub use id::BookingId;
