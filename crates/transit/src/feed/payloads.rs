//! Provider-shaped payload types.
//!
//! These mirror the JSON the tracking provider actually sends, quirks
//! included: coordinates arrive as strings in some payloads and numbers in
//! others, route ids are numbers in the exclusion lists but string keys
//! everywhere else, and the per-route stop list is a heterogeneous array.
//! No validation happens here beyond what decoding requires; the model
//! builder is responsible for cross-referencing the parts.

use std::collections::HashMap;

use serde::Deserialize;

/// One route record from the `getRoutes` call.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoute {
    pub name: String,
    /// The provider's route id, used as the key into the stops payload.
    pub myid: String,
    /// "0" or "1".
    #[serde(default)]
    pub outdated: String,
    #[serde(default)]
    pub distance: f64,
    pub latitude: String,
    pub longitude: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub service_time: String,
}

/// Stop detail record; keyed in [`StopsResponse::stops`] with an `ID` prefix.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStop {
    pub name: String,
    pub route_id: String,
    /// Index within the route's stop list, as a string.
    pub position: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub radius: f64,
}

/// One element of a route's stop list.
///
/// The first two elements of each list are name and color labels; the rest
/// are `[index, stop_id, group_id]` triples.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum StopRouteItem {
    Label(String),
    Entry(String, String, serde_json::Value),
}

impl StopRouteItem {
    pub fn stop_id(&self) -> Option<&str> {
        match self {
            StopRouteItem::Entry(_, stop_id, _) => Some(stop_id),
            StopRouteItem::Label(_) => None,
        }
    }
}

/// One point of a route polyline.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoutePoint {
    pub lat: String,
    pub lng: String,
}

/// The `getStops` payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopsResponse {
    /// Stop details keyed by `"ID" + stop_id`.
    pub stops: HashMap<String, RawStop>,
    /// Stop lists keyed by route id.
    pub routes: HashMap<String, Vec<StopRouteItem>>,
    /// Polylines keyed by route id.
    pub route_points: HashMap<String, Vec<RawRoutePoint>>,
    #[serde(rename = "excludedRoutesID", default)]
    pub excluded_routes_id: Vec<serde_json::Number>,
}

/// One vehicle report from the `getBuses` call.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBus {
    /// OEM vehicle id.
    #[serde(default)]
    pub bus_name: String,
    pub route_id: String,
    /// 0 or 1, as a number this time.
    #[serde(default)]
    pub outdated: i64,
    #[serde(default)]
    pub pax_load: f64,
    #[serde(default)]
    pub total_cap: f64,
    pub latitude: String,
    pub longitude: String,
    #[serde(default)]
    pub calculated_course: String,
}

/// The `getBuses` payload; reports are keyed by route id.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusesResponse {
    pub buses: HashMap<String, Vec<RawBus>>,
    #[serde(default)]
    pub excluded_routes: Vec<serde_json::Number>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stop_route_items_decode_mixed_array() {
        let items: Vec<StopRouteItem> = serde_json::from_value(json!([
            "Green",
            "#00FF00",
            ["1", "10001", 5213],
            ["2", "10002", 5213],
        ]))
        .unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].stop_id(), None);
        assert_eq!(items[2].stop_id(), Some("10001"));
    }

    #[test]
    fn test_stops_response_decodes() {
        let stops: StopsResponse = serde_json::from_value(json!({
            "stops": {
                "ID10001": {
                    "name": "City Hall",
                    "routeId": "47235",
                    "position": "1",
                    "latitude": 40.7440,
                    "longitude": -74.0324,
                    "radius": 30.0,
                }
            },
            "routes": { "47235": ["Green", "#00FF00", ["1", "10001", 5213]] },
            "routePoints": { "47235": [{ "lat": "40.7440", "lng": "-74.0324" }] },
            "excludedRoutesID": [46857],
        }))
        .unwrap();

        assert_eq!(stops.excluded_routes_id[0].to_string(), "46857");
        assert!(stops.stops.contains_key("ID10001"));
    }
}
