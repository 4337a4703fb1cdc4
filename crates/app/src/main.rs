use std::sync::Arc;

use gearbook_registry::{InMemoryRegistry, ReservationStore};
use gearbook_specs::FixedSpecClient;

/// Composition root: builds the one store instance for the process and runs
/// a short reserve/list/release exercise against it. A real deployment would
/// hand the `Arc` to a transport layer instead.
fn main() -> anyhow::Result<()> {
    gearbook_observability::init();

    let registry = InMemoryRegistry::arc(Arc::new(FixedSpecClient));
    tracing::info!("registry seeded from fixed catalog");

    println!(
        "{}",
        serde_json::to_string_pretty(&registry.list_devices())?
    );

    let id = registry.reserve("Samsung Galaxy S8", 1, "tom")?;
    tracing::info!(booking_id = %id, "reserved");

    let booking = registry.get_booking(id)?;
    println!("{}", serde_json::to_string_pretty(&booking)?);

    registry.release(id)?;
    tracing::info!(booking_id = %id, "released");

    Ok(())
}
