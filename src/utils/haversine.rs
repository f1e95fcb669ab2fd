//! Great-circle distance between two [`GeoPoint`]s.
//!
//! Non-finite coordinates are not supported: the result is unspecified
//! (usually NaN). Callers are expected to pass validated points.

use crate::location::GeoPoint;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great-circle distance in kilometers between two points
/// using the haversine formula.
///
/// Identical points give exactly `0.0`.
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let lat_1 = a.latitude.to_radians();
    let lat_2 = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_1.cos() * lat_2.cos() * (d_lng / 2.0).sin().powi(2);
    // h can drift just above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
