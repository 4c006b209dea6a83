//! Provider feed: payload shapes, transport, and model reconstruction.

pub mod client;
pub mod parse;
pub mod payloads;

pub use client::{PassioFeedClient, TransitFeedClient};
pub use parse::{build_model, parse_buses, FeedModel};
pub use payloads::{BusesResponse, RawBus, RawRoute, RawRoutePoint, RawStop, StopsResponse};
