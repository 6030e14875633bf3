use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use super::attributes::generate_attributes;
use crate::config::constant::{COORDINATE_DECIMALS, DEPOT_PROBABILITY};
use crate::distance::geodesic::sample_point;
use crate::domain::types::{GeoPoint, Location, LocationId};
use crate::error::{GeneratorError, Result};

/// Inputs for one location table.
#[derive(Debug, Clone, Copy)]
pub struct LocationRequest {
    /// Total rows, including the fixed depot `L001`.
    pub num_records: usize,
    pub center: GeoPoint,
    pub radius_miles: f64,
}

/// Builds `num_records` locations around the request center.
///
/// `L001` is always a depot sitting exactly on the rounded center. Every later
/// row gets a sampled point, an independent depot draw and its own attribute
/// bundle, in that order.
pub fn build_locations<R: Rng + ?Sized>(
    rng: &mut R,
    request: &LocationRequest,
    today: NaiveDate,
) -> Result<Vec<Location>> {
    if request.num_records == 0 {
        return Err(GeneratorError::InvalidRecordCount);
    }

    let mut locations = Vec::with_capacity(request.num_records);

    locations.push(Location {
        id: LocationId(1),
        point: request.center.rounded(COORDINATE_DECIMALS),
        is_depot: true,
        attributes: generate_attributes(rng, today)?,
    });

    for index in 2..=request.num_records {
        let point = sample_point(rng, request.center, request.radius_miles);
        let is_depot = rng.gen::<f64>() < DEPOT_PROBABILITY;
        let attributes = generate_attributes(rng, today)?;

        let location = Location {
            id: LocationId(index as u32),
            point: point.rounded(COORDINATE_DECIMALS),
            is_depot,
            attributes,
        };
        debug!(id = %location.id, is_depot, "generated location");
        locations.push(location);
    }

    let depots = locations.iter().filter(|l| l.is_depot).count();
    info!(
        "Generated {} locations ({} depots) within {} miles of ({}, {})",
        locations.len(),
        depots,
        request.radius_miles,
        request.center.lat,
        request.center.lon
    );

    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::geodesic::great_circle_distance;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn request(num_records: usize, radius_miles: f64) -> LocationRequest {
        LocationRequest {
            num_records,
            center: GeoPoint::new(37.774929_3, -122.419415_7),
            radius_miles,
        }
    }

    #[test]
    fn first_location_is_fixed_depot() {
        let mut rng = ChaCha8Rng::seed_from_u64(64);
        let locations = build_locations(&mut rng, &request(50, 10.0), today()).unwrap();

        assert_eq!(locations.len(), 50);
        let first = &locations[0];
        assert_eq!(first.id.to_string(), "L001");
        assert!(first.is_depot);
        assert_eq!(first.point, GeoPoint::new(37.774929, -122.419416));
    }

    #[test]
    fn fixed_depot_rounds_like_the_binary_value() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let req = LocationRequest {
            num_records: 1,
            center: GeoPoint::new(1.2902705, 103.8519585),
            radius_miles: 1.0,
        };
        let locations = build_locations(&mut rng, &req, today()).unwrap();
        assert_eq!(locations[0].point, GeoPoint::new(1.290271, 103.851958));
    }

    #[test]
    fn ids_are_sequential() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let locations = build_locations(&mut rng, &request(120, 5.0), today()).unwrap();
        for (i, location) in locations.iter().enumerate() {
            assert_eq!(location.id, LocationId(i as u32 + 1));
        }
        assert_eq!(locations[99].id.to_string(), "L100");
    }

    #[test]
    fn sampled_points_within_radius() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let req = request(2_000, 25.0);
        let locations = build_locations(&mut rng, &req, today()).unwrap();
        for location in &locations[1..] {
            // Rounding to 6 decimals moves a point by well under a thousandth of a mile.
            assert!(great_circle_distance(req.center, location.point) <= req.radius_miles + 1e-3);
        }
    }

    #[test]
    fn single_record_is_only_the_depot() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let locations = build_locations(&mut rng, &request(1, 10.0), today()).unwrap();
        assert_eq!(locations.len(), 1);
        assert!(locations[0].is_depot);
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let req = request(200, 0.0);
        let locations = build_locations(&mut rng, &req, today()).unwrap();
        let center = req.center.rounded(COORDINATE_DECIMALS);
        assert!(locations.iter().all(|l| l.point == center));
    }

    #[test]
    fn zero_records_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = build_locations(&mut rng, &request(0, 1.0), today()).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidRecordCount));
    }

    #[test]
    fn depot_rate_converges() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let n = 100_000;
        let locations = build_locations(&mut rng, &request(n + 1, 10.0), today()).unwrap();

        let depots = locations[1..].iter().filter(|l| l.is_depot).count();
        let rate = depots as f64 / n as f64;
        // Five standard deviations of a Binomial(100_000, 0.1) share.
        let tolerance = 5.0 * (0.1 * 0.9 / n as f64).sqrt();
        assert!((rate - DEPOT_PROBABILITY).abs() < tolerance, "depot rate {rate}");
    }
}
