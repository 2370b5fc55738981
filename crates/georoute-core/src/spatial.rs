//! Spatial math for edge weights and path assembly.

use crate::models::Coordinate;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Two coordinates closer than this on both axes are the same point.
pub const COORDINATE_TOLERANCE_DEG: f64 = 1e-6;

/// Calculate the great-circle distance between two points using the Haversine formula.
///
/// # Returns
/// Distance in kilometers
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Tolerance comparison used when stitching raw anchors onto graph paths.
pub fn same_coordinate(a: &Coordinate, b: &Coordinate) -> bool {
    (a.lat - b.lat).abs() < COORDINATE_TOLERANCE_DEG
        && (a.lon - b.lon).abs() < COORDINATE_TOLERANCE_DEG
}
