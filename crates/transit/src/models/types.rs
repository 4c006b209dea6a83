//! Core data types for routes, stations, and live buses.
//!
//! All of these are rebuilt from scratch on every fetch cycle and discarded
//! once the cycle's response is produced; nothing here is shared between
//! concurrent queries.

use std::sync::Arc;

use crate::identifiers::*;

/// A labeled latitude/longitude pair.
///
/// The fields are explicitly named to rule out positional lat/lng mixups at
/// the distance-computation boundary. Values are taken from the feed as-is:
/// out-of-range coordinates are tolerated, and fields the feed sends as
/// unparseable strings come through as NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A bus line with its ordered station list and path polyline.
///
/// `nodes` is never empty for a route produced by the feed builder: a route
/// without a polyline cannot be tracked and is rejected during parsing.
#[derive(Clone, Debug)]
pub struct Route {
    pub id: RouteIdentifier,
    pub name: Arc<str>,
    pub active: bool,
    pub position: Coordinate,
    pub distance_meta: f64,
    pub timezone: Arc<str>,
    pub group_id: Arc<str>,
    pub message: Arc<str>,
    /// Stations in route order (not spatial order).
    pub path: Vec<Station>,
    /// Polyline nodes in feed order; forward traversal follows this order.
    pub nodes: Vec<Coordinate>,
}

/// A named stop on a route.
#[derive(Clone, Debug)]
pub struct Station {
    pub id: StationIdentifier,
    pub name: Arc<str>,
    pub route_id: RouteIdentifier,
    /// Position within the route's raw stop list.
    pub index: u32,
    pub position: Coordinate,
    pub radius: f64,
}

/// A live-reporting vehicle.
#[derive(Clone, Debug)]
pub struct Bus {
    pub id: BusIdentifier,
    pub name: Arc<str>,
    pub route_id: RouteIdentifier,
    pub active: bool,
    /// Capacity-normalized passenger load in [0, 1], rounded to 2 decimals.
    /// NaN when the feed reports unusable capacity numbers.
    pub load: f64,
    pub position: Coordinate,
    /// Compass bearing in degrees; NaN when the feed value fails to parse.
    pub bearing: f64,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// A feed fetch failed, returned a non-success status, or produced a
    /// body that does not decode. Never retried; fails the whole cycle.
    #[error("feed request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// One part of the feed references an entity missing from another part
    /// (station detail, stop list, polyline). Fatal, no partial recovery.
    #[error("feed cross-reference missing: {0}")]
    Parse(String),

    /// A distance unit string outside the supported set.
    #[error("\"{0}\" is not a supported distance unit")]
    InvalidUnit(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
