use rand::Rng;
use tracing::{debug, info};

use super::pick;
use crate::config::constant::{
    FLEET_PERCENT, HOURS_IN_DAY, MAX_CAPACITY, MIN_CAPACITY, VEHICLE_TEMPERATURE_BANDS,
};
use crate::domain::types::{AvailabilityWindow, Location, LocationId, Vehicle, VehicleId};
use crate::error::{GeneratorError, Result};
use crate::utils::share_rounded_up;

/// Number of vehicles for a table of `location_count` rows.
pub fn fleet_size(location_count: usize) -> usize {
    share_rounded_up(location_count, FLEET_PERCENT)
}

/// Derives a fleet from a finished location table.
///
/// Each vehicle starts at a depot picked with replacement from `locations`.
/// Fails with [`GeneratorError::NoDepot`] before drawing anything when no
/// row is flagged as a depot.
pub fn build_vehicles<R: Rng + ?Sized>(
    rng: &mut R,
    locations: &[Location],
) -> Result<Vec<Vehicle>> {
    let depot_ids: Vec<LocationId> = locations
        .iter()
        .filter(|l| l.is_depot)
        .map(|l| l.id)
        .collect();
    if depot_ids.is_empty() {
        return Err(GeneratorError::NoDepot);
    }

    let num_vehicles = fleet_size(locations.len());
    let mut vehicles = Vec::with_capacity(num_vehicles);

    for index in 1..=num_vehicles {
        let capacity = rng.gen_range(MIN_CAPACITY..=MAX_CAPACITY);
        let temperature = pick(rng, &VEHICLE_TEMPERATURE_BANDS);

        // The end draw starts at start_hour, so the window is ordered by construction.
        let start_hour = rng.gen_range(0..HOURS_IN_DAY);
        let end_hour = rng.gen_range(start_hour..HOURS_IN_DAY);
        let availability = AvailabilityWindow::new(start_hour, end_hour)?;

        let start_location = pick(rng, &depot_ids);

        let vehicle = Vehicle {
            id: VehicleId(index as u32),
            capacity,
            temperature,
            start_location,
            availability,
        };
        debug!(id = %vehicle.id, start = %vehicle.start_location, capacity, "generated vehicle");
        vehicles.push(vehicle);
    }

    info!("Generated {} vehicles across {} depots", vehicles.len(), depot_ids.len());

    Ok(vehicles)
}
