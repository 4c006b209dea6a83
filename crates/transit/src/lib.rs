//! # hop-transit
//!
//! Next-station tracking for a city shuttle feed.
//!
//! The crate polls a transit-tracking provider for routes, stops, and live
//! bus positions, rebuilds a typed model from the loosely-shaped payloads,
//! and answers, for a chosen route, how far the reporting bus is from its
//! next station along the route's path.
//!
//! ## Pipeline
//!
//! feed payloads -> [`feed::parse::build_model`] -> station-node index
//! ([`tracking::index_stations`]) -> per-query resolve
//! ([`tracking::next_station`]) -> path distance
//! ([`tracking::path_distance`]). [`query::RouteTracker`] composes the
//! whole cycle over a [`feed::TransitFeedClient`].
//!
//! ## Example
//!
//! ```
//! use hop_transit::prelude::*;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! // A route running east along the equator, with one station at node 2.
//! let nodes: Vec<Coordinate> = (0..4).map(|i| Coordinate::new(0.0, i as f64)).collect();
//! let station = Station {
//!     id: StationIdentifier::new("s1"),
//!     name: Arc::from("Second Street"),
//!     route_id: RouteIdentifier::new("r1"),
//!     index: 1,
//!     position: Coordinate::new(0.0, 2.0),
//!     radius: 30.0,
//! };
//! let route = Route {
//!     id: RouteIdentifier::new("r1"),
//!     name: Arc::from("Line 1"),
//!     active: true,
//!     position: nodes[0],
//!     distance_meta: 0.0,
//!     timezone: Arc::from("America/New_York"),
//!     group_id: Arc::from("466"),
//!     message: Arc::from(""),
//!     path: vec![station],
//!     nodes,
//! };
//! let bus = Bus {
//!     id: BusIdentifier::new("r1"),
//!     name: Arc::from("HOP-7"),
//!     route_id: RouteIdentifier::new("r1"),
//!     active: true,
//!     load: 0.25,
//!     position: Coordinate::new(0.0, 0.1),
//!     bearing: 90.0,
//! };
//!
//! let routes = HashMap::from([(route.id.clone(), route.clone())]);
//! let index = index_stations(&routes, Unit::Kilometers);
//! let resolved = next_station(&bus, &route, &index, Unit::Kilometers).unwrap();
//! assert_eq!(resolved.current_node, 0);
//! assert_eq!(resolved.next_node, 2);
//!
//! let km = path_distance(resolved.current_node, resolved.next_node, &route, Unit::Kilometers);
//! assert!(km > 0.0);
//! ```

pub mod config;
pub mod feed;
pub mod identifiers;
pub mod models;
pub mod query;
pub mod spatial;
pub mod tracking;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{NamedRoute, TrackerConfig};
    pub use crate::feed::{
        build_model, parse_buses, FeedModel, PassioFeedClient, TransitFeedClient,
    };
    pub use crate::identifiers::*;
    pub use crate::models::types::{Bus, Coordinate, Result, Route, Station, TrackerError};
    pub use crate::query::{RouteStatus, RouteTracker};
    pub use crate::spatial::{distance, Unit};
    pub use crate::tracking::{
        index_stations, next_station, path_distance, ResolvedPosition, StationNodeIndex,
    };
}

pub use prelude::*;
