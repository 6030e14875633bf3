use chrono::NaiveDate;
use rand::Rng;
use tracing::{info, span, Level};

use super::locations::{build_locations, LocationRequest};
use super::vehicles::build_vehicles;
use crate::domain::types::{Location, Vehicle};
use crate::error::Result;

/// Location and vehicle tables from a single generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    pub locations: Vec<Location>,
    pub vehicles: Vec<Vehicle>,
}

impl FixtureSet {
    pub fn depot_count(&self) -> usize {
        self.locations.iter().filter(|l| l.is_depot).count()
    }
}

/// Generates locations, then a fleet bound to their depots, from one rng.
pub fn generate_fixtures<R: Rng + ?Sized>(
    rng: &mut R,
    request: &LocationRequest,
    today: NaiveDate,
) -> Result<FixtureSet> {
    let run_span = span!(Level::INFO, "generate_fixtures", records = request.num_records);
    let _guard = run_span.enter();

    let locations = build_locations(rng, request, today)?;
    let vehicles = build_vehicles(rng, &locations)?;

    let fixtures = FixtureSet {
        locations,
        vehicles,
    };
    info!(
        "Fixture set ready: {} locations, {} depots, {} vehicles",
        fixtures.locations.len(),
        fixtures.depot_count(),
        fixtures.vehicles.len()
    );

    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::GeoPoint;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn request(num_records: usize) -> LocationRequest {
        LocationRequest {
            num_records,
            center: GeoPoint::new(1.3521, 103.8198),
            radius_miles: 8.0,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn ten_records_get_three_vehicles_at_depots() {
        let mut rng = ChaCha8Rng::seed_from_u64(64);
        let fixtures = generate_fixtures(&mut rng, &request(10), today()).unwrap();

        assert_eq!(fixtures.locations.len(), 10);
        assert_eq!(fixtures.vehicles.len(), 3);
        for vehicle in &fixtures.vehicles {
            let start = fixtures
                .locations
                .iter()
                .find(|l| l.id == vehicle.start_location)
                .unwrap();
            assert!(start.is_depot);
        }
    }

    #[test]
    fn same_seed_same_fixtures() {
        let run = |seed| {
            generate_fixtures(&mut ChaCha8Rng::seed_from_u64(seed), &request(60), today()).unwrap()
        };
        assert_eq!(run(7), run(7));
        assert_ne!(run(7), run(8));
    }

    #[test]
    fn depot_count_includes_fixed_depot() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let fixtures = generate_fixtures(&mut rng, &request(1), today()).unwrap();
        assert_eq!(fixtures.depot_count(), 1);
        assert_eq!(fixtures.vehicles.len(), 1);
        assert_eq!(fixtures.vehicles[0].start_location.to_string(), "L001");
    }
}
