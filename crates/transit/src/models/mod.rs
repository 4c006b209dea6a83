//! Domain model reconstructed from the provider feed.

pub mod types;

pub use types::{Bus, Coordinate, Result, Route, Station, TrackerError};
