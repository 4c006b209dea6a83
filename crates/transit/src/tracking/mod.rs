//! Matching buses and stations onto route geometry.

pub mod distance;
pub mod index;
pub mod resolver;

pub use distance::path_distance;
pub use index::{index_stations, StationNodeIndex};
pub use resolver::{next_station, ResolvedPosition};
