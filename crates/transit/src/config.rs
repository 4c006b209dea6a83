//! Deployment configuration.
//!
//! Everything the pipeline needs to know about its deployment - provider
//! endpoint, transit system, friendly route names, output unit - travels in
//! one immutable value rather than process-wide constants. The defaults are
//! the Hoboken HOP deployment this service was written for.

use serde::Deserialize;

use crate::identifiers::RouteIdentifier;
use crate::spatial::Unit;

/// A friendly name for a provider route id (e.g. "green" -> 47235).
#[derive(Clone, Debug, Deserialize)]
pub struct NamedRoute {
    pub name: String,
    pub id: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Provider endpoint, without query parameters.
    pub base_url: String,
    /// Provider-side transit system id.
    pub system_id: String,
    /// Unit for reported distances.
    pub unit: Unit,
    /// Upper bound on each feed round-trip.
    pub request_timeout_secs: u64,
    /// Queryable routes by friendly name.
    pub routes: Vec<NamedRoute>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://passio3.com/www/mapGetData.php".to_string(),
            system_id: "466".to_string(),
            unit: Unit::Miles,
            request_timeout_secs: 10,
            routes: vec![
                NamedRoute {
                    name: "green".to_string(),
                    id: "47235".to_string(),
                },
                NamedRoute {
                    name: "red".to_string(),
                    id: "47233".to_string(),
                },
                NamedRoute {
                    name: "blue".to_string(),
                    id: "47234".to_string(),
                },
                NamedRoute {
                    name: "senior".to_string(),
                    id: "46857".to_string(),
                },
            ],
        }
    }
}

impl TrackerConfig {
    /// Resolve a friendly route name (or a configured route id) to the
    /// provider route id. Names are matched case-insensitively.
    pub fn resolve_route(&self, query: &str) -> Option<RouteIdentifier> {
        self.routes
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(query) || r.id == query)
            .map(|r| RouteIdentifier::new(&r.id))
    }
}
