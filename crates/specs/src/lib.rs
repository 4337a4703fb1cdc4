//! Tech-spec lookup collaborator.
//!
//! The registry decorates device listings with descriptive spec fields
//! fetched per device name. The lookup is modelled as a capability so the
//! store and its tests never depend on a particular backend.

pub mod provider;

pub use provider::{FixedSpecClient, SpecProvider, TechSpecs};
