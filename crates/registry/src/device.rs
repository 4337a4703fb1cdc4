//! Device listing record.

use serde::{Deserialize, Serialize};

use gearbook_specs::TechSpecs;

/// Point-in-time view of one catalog entry.
///
/// Produced by `list_devices`; `available` and `tech_specs` are derived at
/// query time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Catalog name, unique key into the stock ledger.
    pub name: String,
    /// Whether any stock remained when the snapshot was taken.
    pub available: bool,
    /// Descriptive spec fields supplied by the spec-lookup collaborator.
    pub tech_specs: TechSpecs,
}
