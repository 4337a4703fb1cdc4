//! Seed catalog of reservable devices.

use std::collections::HashMap;

/// Initial device stock, applied once at store construction.
///
/// The Galaxy S9 pool is deliberately deep so contention tests can hammer a
/// single entry without exhausting it.
pub fn seed_catalog() -> HashMap<String, u32> {
    HashMap::from([
        ("Samsung Galaxy S9".to_string(), 1000),
        ("Samsung Galaxy S8".to_string(), 2),
        ("Motorola Nexus 6".to_string(), 1),
        ("Oneplus 9".to_string(), 1),
        ("Apple iPhone 13".to_string(), 1),
        ("Apple iPhone 12".to_string(), 1),
        ("Apple iPhone 11".to_string(), 1),
        ("iPhone X".to_string(), 1),
        ("Nokia 3310".to_string(), 1),
    ])
}
