//! Reconstruction of the typed model from raw feed payloads.
//!
//! The feed arrives in three loosely-shaped parts that reference each other
//! by id. This module joins them: routes pick up their stop lists and
//! polylines from the stops payload, stations are flattened into a global
//! table, and excluded routes are removed before any of that happens. Any
//! dangling cross-reference is fatal for the cycle.

use std::collections::{HashMap, HashSet};

use crate::feed::payloads::{BusesResponse, RawRoute, StopsResponse};
use crate::identifiers::*;
use crate::models::types::{Bus, Coordinate, Result, Route, Station, TrackerError};

/// Everything one fetch cycle derives from the routes and stops payloads.
#[derive(Debug)]
pub struct FeedModel {
    pub routes: HashMap<RouteIdentifier, Route>,
    /// Flattened station table, keyed globally by station id. When two
    /// retained routes share a station id, the last retained route in feed
    /// order wins; see `build_model`.
    pub stations: HashMap<StationIdentifier, Station>,
    pub excluded_routes: HashSet<RouteIdentifier>,
}

/// Mirror of the provider's own string coercion: anything that fails to
/// parse becomes NaN rather than an error.
fn parse_coord_field(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build routes and stations from the raw payloads, applying route
/// exclusion.
///
/// Routes are processed in feed order. Station-id collisions across retained
/// routes are resolved by overwrite: the later-processed route's station
/// record replaces the earlier one. Feed order is the only ordering involved,
/// so the policy is reproducible run to run.
pub fn build_model(raw_routes: &[RawRoute], stops: &StopsResponse) -> Result<FeedModel> {
    let excluded_routes: HashSet<RouteIdentifier> = stops
        .excluded_routes_id
        .iter()
        .map(|id| RouteIdentifier::new(id.to_string()))
        .collect();

    let mut routes = HashMap::new();
    let mut stations = HashMap::new();

    for raw in raw_routes {
        let route_id = RouteIdentifier::new(&raw.myid);
        if excluded_routes.contains(&route_id) {
            log::debug!("skipping excluded route {route_id}");
            continue;
        }

        let stop_list = stops.routes.get(raw.myid.as_str()).ok_or_else(|| {
            TrackerError::Parse(format!("route {} has no stop list entry", raw.myid))
        })?;

        // The first two positions are name and color metadata.
        let mut path = Vec::new();
        for item in stop_list.iter().skip(2) {
            let stop_id = item.stop_id().ok_or_else(|| {
                TrackerError::Parse(format!(
                    "route {} stop list holds a non-entry past the metadata",
                    raw.myid
                ))
            })?;
            let detail = stops.stops.get(&format!("ID{stop_id}")).ok_or_else(|| {
                TrackerError::Parse(format!("stop {stop_id} has no detail record"))
            })?;
            let station = Station {
                id: StationIdentifier::new(stop_id),
                name: detail.name.as_str().into(),
                route_id: RouteIdentifier::new(&detail.route_id),
                index: detail.position.trim().parse().unwrap_or(0),
                position: Coordinate::new(detail.latitude, detail.longitude),
                radius: detail.radius,
            };
            stations.insert(station.id.clone(), station.clone());
            path.push(station);
        }

        let points = stops.route_points.get(raw.myid.as_str()).ok_or_else(|| {
            TrackerError::Parse(format!("route {} has no polyline", raw.myid))
        })?;
        if points.is_empty() {
            return Err(TrackerError::Parse(format!(
                "route {} polyline is empty",
                raw.myid
            )));
        }
        let nodes: Vec<Coordinate> = points
            .iter()
            .map(|p| Coordinate::new(parse_coord_field(&p.lat), parse_coord_field(&p.lng)))
            .collect();

        let route = Route {
            id: route_id.clone(),
            name: raw.name.as_str().into(),
            active: raw.outdated == "1",
            position: Coordinate::new(
                parse_coord_field(&raw.latitude),
                parse_coord_field(&raw.longitude),
            ),
            distance_meta: raw.distance,
            timezone: raw.timezone.as_str().into(),
            group_id: raw.group_id.as_str().into(),
            message: raw.service_time.as_str().into(),
            path,
            nodes,
        };
        routes.insert(route_id, route);
    }

    log::debug!(
        "built model: {} routes, {} stations, {} excluded",
        routes.len(),
        stations.len(),
        excluded_routes.len()
    );
    Ok(FeedModel {
        routes,
        stations,
        excluded_routes,
    })
}

/// Parse the bus payload into one [`Bus`] per reporting route key.
///
/// Excluded route keys and empty report lists contribute nothing. When a key
/// lists several simultaneous reports, only the first is kept. Malformed
/// numeric fields come through as NaN; consumers must tolerate them.
pub fn parse_buses(
    raw: &BusesResponse,
    excluded_routes: &HashSet<RouteIdentifier>,
) -> HashMap<BusIdentifier, Bus> {
    let mut buses = HashMap::new();
    for (key, reports) in &raw.buses {
        if excluded_routes.contains(&RouteIdentifier::new(key)) {
            log::debug!("dropping bus reports for excluded route {key}");
            continue;
        }
        let Some(first) = reports.first() else {
            continue;
        };
        let bus = Bus {
            id: BusIdentifier::new(key),
            name: first.bus_name.as_str().into(),
            route_id: RouteIdentifier::new(&first.route_id),
            active: first.outdated == 1,
            load: round2(first.pax_load / first.total_cap),
            position: Coordinate::new(
                parse_coord_field(&first.latitude),
                parse_coord_field(&first.longitude),
            ),
            bearing: first.calculated_course.trim().parse().unwrap_or(f64::NAN),
        };
        buses.insert(bus.id.clone(), bus);
    }
    buses
}
