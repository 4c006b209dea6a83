//! The per-route query cycle.
//!
//! Each query fetches the three feed payloads in sequence, rebuilds the
//! whole model from scratch, and answers with the distance to the reporting
//! bus's next station. Nothing survives between cycles, so a failed cycle
//! cannot corrupt a later one.

use crate::config::TrackerConfig;
use crate::feed::client::TransitFeedClient;
use crate::feed::parse::{build_model, parse_buses};
use crate::identifiers::RouteIdentifier;
use crate::models::types::{Coordinate, Result, TrackerError};
use crate::spatial::Unit;
use crate::tracking::{index_stations, next_station, path_distance};

/// Outcome of a route query.
///
/// A route with no reporting bus is an expected state of the world, not an
/// error, so it is a variant here rather than a [`TrackerError`].
#[derive(Clone, Debug)]
pub enum RouteStatus {
    NextStop {
        /// Path distance to the next station, fixed to 3 decimals.
        distance: String,
        unit: Unit,
        station_name: String,
        bus_position: Coordinate,
    },
    NoActiveBus,
}

/// Runs the fetch-build-index-resolve pipeline against a feed client.
pub struct RouteTracker<C: TransitFeedClient> {
    client: C,
    config: TrackerConfig,
}

impl<C: TransitFeedClient> RouteTracker<C> {
    pub fn new(client: C, config: TrackerConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Answer "where is the next station for the bus on `route_id`, and how
    /// far away is it along the route's path?".
    pub async fn query_route(&self, route_id: &RouteIdentifier) -> Result<RouteStatus> {
        // The provider serves these from one stateful session; keep the
        // round-trips strictly sequential.
        let raw_routes = self.client.fetch_routes().await?;
        let stops = self.client.fetch_stops().await?;
        let raw_buses = self.client.fetch_buses().await?;

        let model = build_model(&raw_routes, &stops)?;
        let buses = parse_buses(&raw_buses, &model.excluded_routes);
        let index = index_stations(&model.routes, self.config.unit);

        let Some(bus) = buses.values().find(|b| &b.route_id == route_id) else {
            log::debug!("no reporting bus for route {route_id}");
            return Ok(RouteStatus::NoActiveBus);
        };

        let route = model.routes.get(route_id).ok_or_else(|| {
            TrackerError::Parse(format!("bus reports for unknown route {route_id}"))
        })?;

        let resolved = next_station(bus, route, &index, self.config.unit)?;
        let total = path_distance(resolved.current_node, resolved.next_node, route, self.config.unit);

        let station_name = model
            .stations
            .get(&resolved.next_station)
            .map(|s| s.name.to_string())
            .ok_or_else(|| {
                TrackerError::Parse(format!(
                    "station {} missing from the station table",
                    resolved.next_station
                ))
            })?;

        log::info!(
            "route {route_id}: {total:.3} {} to {station_name}",
            self.config.unit
        );

        Ok(RouteStatus::NextStop {
            distance: format!("{total:.3}"),
            unit: self.config.unit,
            station_name,
            bus_position: bus.position,
        })
    }
}
