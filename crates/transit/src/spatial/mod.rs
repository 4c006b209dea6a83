//! Spherical distance computation with selectable output units.

pub mod queries;
pub mod units;

pub use queries::{degrees_to_radians, distance, radians_to_length};
pub use units::Unit;
