//! Locating a bus on its route and picking the next station ahead.

use crate::identifiers::StationIdentifier;
use crate::models::types::{Bus, Result, Route, TrackerError};
use crate::spatial::Unit;
use crate::tracking::index::{nearest_node, StationNodeIndex};

/// Where a bus sits on its route's polyline and which station comes next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPosition {
    /// Node nearest to the bus's reported position.
    pub current_node: usize,
    /// Node assigned to the next station ahead in path order.
    pub next_node: usize,
    pub next_station: StationIdentifier,
}

/// Find the station ahead of `bus` along `route`.
///
/// Among station nodes strictly past the bus's nearest node, the smallest
/// index wins. When no station lies ahead the path is treated as a loop and
/// the smallest station node overall is taken instead.
///
/// When several stations share the chosen node, the first such station in
/// route-path order is returned. That makes the pick reproducible; which
/// station "deserves" a shared node is a data-quality question the feed
/// cannot answer.
pub fn next_station(
    bus: &Bus,
    route: &Route,
    index: &StationNodeIndex,
    unit: Unit,
) -> Result<ResolvedPosition> {
    let current_node = nearest_node(&bus.position, &route.nodes, unit).ok_or_else(|| {
        TrackerError::Parse(format!("route {} has no path nodes", route.id))
    })?;

    let per_route = index.get(&route.id).ok_or_else(|| {
        TrackerError::Parse(format!("route {} is missing from the station index", route.id))
    })?;

    let ahead = per_route.values().copied().filter(|&n| n > current_node).min();
    let next_node = match ahead {
        Some(n) => n,
        // Bus is at or past the last station's node; wrap to the start.
        None => per_route.values().copied().min().ok_or_else(|| {
            TrackerError::Parse(format!("route {} has no indexed stations", route.id))
        })?,
    };

    let next_station = route
        .path
        .iter()
        .find(|s| per_route.get(&s.id) == Some(&next_node))
        .map(|s| s.id.clone())
        .ok_or_else(|| {
            TrackerError::Parse(format!(
                "no station on route {} maps to node {next_node}",
                route.id
            ))
        })?;

    log::trace!(
        "bus {} on route {}: node {current_node}, next station {next_station} at node {next_node}",
        bus.id,
        route.id
    );

    Ok(ResolvedPosition {
        current_node,
        next_node,
        next_station,
    })
}
