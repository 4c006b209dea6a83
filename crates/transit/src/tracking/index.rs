//! Nearest-node assignment for every station on every route.
//!
//! The index is built once per fetch cycle from the freshly parsed model and
//! stays immutable for the rest of that cycle.

use std::collections::HashMap;

use crate::identifiers::{RouteIdentifier, StationIdentifier};
use crate::models::types::{Coordinate, Route};
use crate::spatial::{distance, Unit};

/// route id -> (station id -> index into that route's `nodes`).
pub type StationNodeIndex = HashMap<RouteIdentifier, HashMap<StationIdentifier, usize>>;

/// Index of the node nearest to `position`, scanning in node order.
///
/// Tie-break policy: first strict-less wins. A node that exactly ties an
/// earlier one never replaces it, so the earliest-scanned index is kept
/// regardless of how the caller obtained the node list.
pub(crate) fn nearest_node(position: &Coordinate, nodes: &[Coordinate], unit: Unit) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, node) in nodes.iter().enumerate() {
        let d = distance(position, node, unit);
        match best {
            None => best = Some((i, d)),
            // Strict less-than only; NaN never displaces a held index.
            Some((_, best_d)) if d < best_d => best = Some((i, d)),
            _ => {}
        }
    }
    best.map(|(i, _)| i)
}

/// Map every station on every route to its nearest path node.
pub fn index_stations(routes: &HashMap<RouteIdentifier, Route>, unit: Unit) -> StationNodeIndex {
    routes
        .iter()
        .map(|(route_id, route)| {
            let per_route: HashMap<StationIdentifier, usize> = route
                .path
                .iter()
                .filter_map(|station| {
                    nearest_node(&station.position, &route.nodes, unit)
                        .map(|node| (station.id.clone(), node))
                })
                .collect();
            (route_id.clone(), per_route)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Station;
    use std::sync::Arc;

    fn station(id: &str, route: &str, lat: f64, lon: f64) -> Station {
        Station {
            id: StationIdentifier::new(id),
            name: Arc::from(id),
            route_id: RouteIdentifier::new(route),
            index: 0,
            position: Coordinate::new(lat, lon),
            radius: 30.0,
        }
    }

    fn route_with(nodes: Vec<Coordinate>, path: Vec<Station>) -> Route {
        Route {
            id: RouteIdentifier::new("r1"),
            name: Arc::from("Route 1"),
            active: true,
            position: nodes[0],
            distance_meta: 0.0,
            timezone: Arc::from(""),
            group_id: Arc::from(""),
            message: Arc::from(""),
            path,
            nodes,
        }
    }

    #[test]
    fn test_nearest_node_tie_keeps_earliest() {
        // Two nodes equidistant from the probe; index 0 must win.
        let nodes = vec![Coordinate::new(0.0, -1.0), Coordinate::new(0.0, 1.0)];
        let probe = Coordinate::new(0.0, 0.0);
        assert_eq!(nearest_node(&probe, &nodes, Unit::Kilometers), Some(0));
    }

    #[test]
    fn test_nearest_node_empty_slice() {
        let probe = Coordinate::new(0.0, 0.0);
        assert_eq!(nearest_node(&probe, &[], Unit::Kilometers), None);
    }

    #[test]
    fn test_indexed_node_is_never_beaten() {
        // No node in the route may be strictly closer to a station than
        // the node chosen for it.
        let nodes = vec![
            Coordinate::new(40.7370, -74.0308),
            Coordinate::new(40.7410, -74.0299),
            Coordinate::new(40.7450, -74.0290),
            Coordinate::new(40.7490, -74.0280),
            Coordinate::new(40.7530, -74.0270),
        ];
        let path = vec![
            station("s1", "r1", 40.7372, -74.0310),
            station("s2", "r1", 40.7455, -74.0288),
            station("s3", "r1", 40.7528, -74.0271),
        ];
        let route = route_with(nodes.clone(), path.clone());
        let routes = HashMap::from([(route.id.clone(), route)]);

        let index = index_stations(&routes, Unit::Miles);
        let per_route = &index[&RouteIdentifier::new("r1")];
        assert_eq!(per_route.len(), 3);

        for s in &path {
            let chosen = per_route[&s.id];
            let chosen_d = distance(&s.position, &nodes[chosen], Unit::Miles);
            for node in &nodes {
                assert!(distance(&s.position, node, Unit::Miles) >= chosen_d);
            }
        }
    }
}
