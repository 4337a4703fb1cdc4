//! Reservation request shape checks.
//!
//! Pure predicates over the request itself; none of them needs ledger state,
//! so they all run before any lock is taken. Device existence is checked
//! inside the store's locked path.

use gearbook_core::{RegistryError, RegistryResult};

/// Validate the shape of a reservation request.
pub fn validate_reservation(device_name: &str, count: u32, owner: &str) -> RegistryResult<()> {
    if count < 1 {
        return Err(RegistryError::invalid_parameter(
            "requested count can't be less than 1",
        ));
    }
    if owner.trim().is_empty() {
        return Err(RegistryError::invalid_parameter("owner is required"));
    }
    if device_name.trim().is_empty() {
        return Err(RegistryError::invalid_parameter("device name is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_request() {
        assert!(validate_reservation("Nokia 3310", 1, "tom").is_ok());
    }

    #[test]
    fn rejects_zero_count() {
        let err = validate_reservation("Nokia 3310", 0, "tom").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_blank_owner() {
        let err = validate_reservation("Nokia 3310", 1, "   ").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_blank_device_name() {
        let err = validate_reservation("  ", 1, "tom").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidParameter(_)));
    }

    #[test]
    fn count_check_runs_first() {
        // A request can be malformed in several ways at once; the count check
        // wins so callers get a stable error message.
        let err = validate_reservation("", 0, "").unwrap_err();
        assert_eq!(
            err,
            RegistryError::invalid_parameter("requested count can't be less than 1")
        );
    }
}
