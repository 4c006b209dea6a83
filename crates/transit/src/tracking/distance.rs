//! Path length between two nodes of a route polyline.

use crate::models::types::Route;
use crate::spatial::{distance, Unit};

/// Sum the segment lengths from `current` to `target`, walking forward one
/// node at a time and wrapping past the end of the polyline.
///
/// Equal indices are zero by definition. The walk is modulo arithmetic over
/// the node sequence, never a backwards shortcut: wrapping from the last
/// node goes through node 0 even when stepping backwards would be shorter.
///
/// Degenerate geometry (fewer than two nodes, or an index outside the
/// polyline) yields zero; the forward walk could never reach such a target.
pub fn path_distance(current: usize, target: usize, route: &Route, unit: Unit) -> f64 {
    if current == target {
        return 0.0;
    }
    let nodes = &route.nodes;
    if nodes.len() < 2 || current >= nodes.len() || target >= nodes.len() {
        return 0.0;
    }

    let mut total = 0.0;
    let mut curr = current;
    while curr != target {
        let next = (curr + 1) % nodes.len();
        total += distance(&nodes[curr], &nodes[next], unit);
        curr = next;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::RouteIdentifier;
    use crate::models::types::Coordinate;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn route_with(nodes: Vec<Coordinate>) -> Route {
        Route {
            id: RouteIdentifier::new("r1"),
            name: Arc::from("Line"),
            active: true,
            position: Coordinate::new(0.0, 0.0),
            distance_meta: 0.0,
            timezone: Arc::from(""),
            group_id: Arc::from(""),
            message: Arc::from(""),
            path: Vec::new(),
            nodes,
        }
    }

    fn line_route() -> Route {
        route_with((0..4).map(|i| Coordinate::new(0.0, i as f64)).collect())
    }

    #[test]
    fn test_equal_indices_are_zero() {
        let route = line_route();
        for i in 0..4 {
            assert_eq!(path_distance(i, i, &route, Unit::Miles), 0.0);
        }
        // Even out-of-range indices, regardless of route content.
        assert_eq!(path_distance(5, 5, &route, Unit::Miles), 0.0);
    }

    #[test]
    fn test_forward_walk_sums_segments() {
        let route = line_route();
        let seg01 = distance(&route.nodes[0], &route.nodes[1], Unit::Kilometers);
        let seg12 = distance(&route.nodes[1], &route.nodes[2], Unit::Kilometers);

        let total = path_distance(0, 2, &route, Unit::Kilometers);
        assert_relative_eq!(total, seg01 + seg12, max_relative = 1e-12);
    }

    #[test]
    fn test_wraparound_walks_through_start() {
        let route = line_route();
        let seg30 = distance(&route.nodes[3], &route.nodes[0], Unit::Kilometers);
        let seg01 = distance(&route.nodes[0], &route.nodes[1], Unit::Kilometers);

        // 3 -> 0 -> 1, not a backwards hop from 3 to 1.
        let total = path_distance(3, 1, &route, Unit::Kilometers);
        assert_relative_eq!(total, seg30 + seg01, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_polylines_terminate() {
        let single = route_with(vec![Coordinate::new(0.0, 0.0)]);
        assert_eq!(path_distance(0, 1, &single, Unit::Miles), 0.0);

        let empty = route_with(Vec::new());
        assert_eq!(path_distance(0, 1, &empty, Unit::Miles), 0.0);

        // Target beyond the polyline can never be reached by the walk.
        let route = line_route();
        assert_eq!(path_distance(1, 9, &route, Unit::Miles), 0.0);
    }
}
