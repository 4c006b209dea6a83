//! Great-circle distance on a sphere.
//!
//! The haversine computation works on the labeled fields of [`Coordinate`],
//! so latitude and longitude can never swap roles between the parsing layer
//! and the geometry layer.

use crate::models::types::Coordinate;
use crate::spatial::units::Unit;

/// Convert degrees to radians, reducing modulo 360 first so inputs outside
/// [-360, 360] are normalized before use.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    (degrees % 360.0).to_radians()
}

/// Convert a central angle in radians to the given unit.
pub fn radians_to_length(radians: f64, unit: Unit) -> f64 {
    radians * unit.factor()
}

/// Haversine distance between two coordinates in the given unit.
///
/// Symmetric in its endpoints, and exactly zero when both endpoints are the
/// same coordinate.
pub fn distance(from: &Coordinate, to: &Coordinate, unit: Unit) -> f64 {
    let d_lat = degrees_to_radians(to.latitude - from.latitude);
    let d_lon = degrees_to_radians(to.longitude - from.longitude);
    let lat1 = degrees_to_radians(from.latitude);
    let lat2 = degrees_to_radians(to.latitude);

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();

    radians_to_length(2.0 * a.sqrt().atan2((1.0 - a).sqrt()), unit)
}
