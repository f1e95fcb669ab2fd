//! Generates random waypoints around a location.
//!
//! Used to build realistic point clusters for tests.

use rand::Rng;

use crate::location::GeoPoint;

/// Kilometers covered by one degree of latitude.
const KM_PER_DEGREE: f64 = 111.195;

/// Generates `capacity` random points within `radius_km` of `location`.
///
/// Points are drawn uniformly in a square in degree space, scaled so
/// that the longitude spread matches the radius at the location's
/// latitude. Results are clamped to valid geographic bounds.
pub fn generate_points_near(
    location: &GeoPoint,
    radius_km: f64,
    capacity: usize,
) -> Vec<GeoPoint> {
    let mut rng = rand::thread_rng();
    let lat_span = radius_km / KM_PER_DEGREE;
    let lng_span = lat_span / location.latitude.to_radians().cos().abs().max(0.01);

    (0..capacity)
        .map(|_| {
            let latitude = location.latitude + rng.gen_range(-lat_span..=lat_span);
            let longitude = location.longitude + rng.gen_range(-lng_span..=lng_span);
            GeoPoint::new(latitude.clamp(-90.0, 90.0), longitude.clamp(-180.0, 180.0))
        })
        .collect()
}
