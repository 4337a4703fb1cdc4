//! Spec provider trait and the fixed-response client.

use std::collections::HashMap;

/// Spec-field name to value mapping, attached to devices at query time only.
pub type TechSpecs = HashMap<String, String>;

/// Source of descriptive tech-spec fields for a device.
///
/// Infallible by contract: a provider that cannot resolve a device returns
/// whatever fixed or empty mapping it sees fit, never an error. Callers must
/// assume a fetch can block on IO and keep it out of any locked section.
pub trait SpecProvider: Send + Sync {
    fn fetch_tech_specs(&self, device_name: &str) -> TechSpecs;
}

/// Stand-in for a real network spec lookup.
///
/// Returns the same radio-band mapping for every device. Good enough until a
/// proper catalog API client replaces it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedSpecClient;

impl SpecProvider for FixedSpecClient {
    fn fetch_tech_specs(&self, _device_name: &str) -> TechSpecs {
        TechSpecs::from([
            (
                "technology".to_string(),
                "GSM / CDMA / HSPA / EVDO / LTE".to_string(),
            ),
            (
                "_2g_bands".to_string(),
                "GSM 850 / 900 / 1800 / 1900".to_string(),
            ),
            (
                "_3g_bands".to_string(),
                "HSDPA 850 / 900 / 1700(AWS) / 1900 / 2100".to_string(),
            ),
            (
                "_4g_bands".to_string(),
                "1, 2, 3, 4, 5, 7, 8, 12, 13, 14, 17, 18, 19, 20, 25, 26, 28, 29, 30, 32, 34, 38, 39, 40, 41, 46, 66 - A2097"
                    .to_string(),
            ),
        ])
    }
}
