//! Planar vector helpers over latitude/longitude deltas.
//!
//! Coordinates are treated as a flat `[longitude, latitude]` plane.
//! This is only good for ranking points within a small cluster; use
//! [`haversine`](`crate::haversine`) wherever a real distance is needed.

use vecmath::{vec2_dot, vec2_len, vec2_sub, Vector2};

use crate::location::GeoPoint;

/// `[dx, dy]` where `dx` is a longitude delta and `dy` a latitude delta,
/// both in degrees.
pub type Vec2 = Vector2<f64>;

/// Returns the planar displacement from `origin` to `target`.
pub fn vector(origin: &GeoPoint, target: &GeoPoint) -> Vec2 {
    vec2_sub(
        [target.longitude, target.latitude],
        [origin.longitude, origin.latitude],
    )
}

/// Dot product of two vectors.
pub fn dot(u: Vec2, v: Vec2) -> f64 {
    vec2_dot(u, v)
}

/// Euclidean length of a vector.
pub fn norm(v: Vec2) -> f64 {
    vec2_len(v)
}

/// Signed length of the projection of `origin -> point` onto
/// `direction`, in degrees.
///
/// A zero-length `direction` carries no preference, so every point
/// gets `0.0`.
pub fn progress(point: &GeoPoint, origin: &GeoPoint, direction: Vec2) -> f64 {
    let n = norm(direction);
    if n == 0.0 {
        return 0.0;
    }
    dot(vector(origin, point), direction) / n
}
