use std::f64::consts::TAU;

use rand::Rng;
use tracing::trace;

use crate::config::constant::EARTH_RADIUS_MILES;
use crate::domain::types::GeoPoint;

/// Draws a point uniformly by area from the spherical cap of `radius_miles`
/// around `center`.
///
/// Sampling the polar angle directly would crowd points toward the rim, so
/// the area fraction `u` is mapped through `cos θ = 1 − u·(1 − cos θmax)`
/// before rotating the center along a random bearing. A zero radius returns
/// `center` unchanged; both draws are still taken so the rng stream does not
/// shift.
pub fn sample_point<R: Rng + ?Sized>(rng: &mut R, center: GeoPoint, radius_miles: f64) -> GeoPoint {
    let max_angle = radius_miles / EARTH_RADIUS_MILES;

    let u: f64 = rng.gen();
    let cos_theta = 1.0 - u * (1.0 - max_angle.cos());
    let theta = cos_theta.acos();
    let bearing = rng.gen_range(0.0..TAU);

    if theta == 0.0 {
        return center;
    }

    let lat0 = center.lat.to_radians();
    let lon0 = center.lon.to_radians();

    let lat = (lat0.sin() * theta.cos() + lat0.cos() * theta.sin() * bearing.cos()).asin();
    let lon = lon0
        + (bearing.sin() * theta.sin() * lat0.cos()).atan2(theta.cos() - lat0.sin() * lat.sin());

    let point = GeoPoint::new(lat.to_degrees(), lon.to_degrees());
    trace!(theta, bearing, ?point, "sampled point");
    point
}

/// Haversine distance in miles.
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SINGAPORE: GeoPoint = GeoPoint {
        lat: 1.3521,
        lon: 103.8198,
    };

    #[test]
    fn samples_stay_inside_radius() {
        let mut rng = ChaCha8Rng::seed_from_u64(64);
        let radius = 15.0;
        for _ in 0..10_000 {
            let p = sample_point(&mut rng, SINGAPORE, radius);
            assert!(great_circle_distance(SINGAPORE, p) <= radius + 1e-6);
        }
    }

    #[test]
    fn zero_radius_returns_center() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert_eq!(sample_point(&mut rng, SINGAPORE, 0.0), SINGAPORE);
        }
    }

    #[test]
    fn zero_radius_consumes_same_draws() {
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        sample_point(&mut a, SINGAPORE, 0.0);
        sample_point(&mut b, SINGAPORE, 10.0);
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }

    #[test]
    fn samples_are_uniform_by_area() {
        // A cap of half the radius holds about a quarter of the area.
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let center = GeoPoint::new(40.7128, -74.0060);
        let radius = 50.0;
        let n = 100_000;

        let inner = (0..n)
            .map(|_| sample_point(&mut rng, center, radius))
            .filter(|p| great_circle_distance(center, *p) <= radius / 2.0)
            .count();

        let share = inner as f64 / n as f64;
        assert!((share - 0.25).abs() < 0.01, "inner share {share}");
    }

    #[test]
    fn distance_of_known_pair() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let paris = GeoPoint::new(48.8566, 2.3522);
        let d = great_circle_distance(london, paris);
        assert!((d - 213.5).abs() < 1.0, "got {d}");
        assert_eq!(great_circle_distance(london, london), 0.0);
    }
}
