//! hop — query the HOP shuttle tracker from a terminal.
//!
//! Each requested route runs its own full fetch-and-recompute cycle; a
//! failure in one route's cycle is reported and does not abort the others.

mod args;

use anyhow::Context;
use clap::Parser;

use crate::args::CliArgs;
use hop_transit::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str(&raw).context("parsing config file")?
        }
        None => TrackerConfig::default(),
    };
    if let Some(unit) = &args.unit {
        config.unit = unit.parse::<Unit>()?;
    }

    let targets: Vec<(String, RouteIdentifier)> = match &args.route {
        Some(query) => {
            let id = config
                .resolve_route(query)
                .with_context(|| format!("unknown route \"{query}\""))?;
            vec![(query.clone(), id)]
        }
        None => config
            .routes
            .iter()
            .map(|r| (r.name.clone(), RouteIdentifier::new(&r.id)))
            .collect(),
    };

    let client = PassioFeedClient::new(&config)?;
    let tracker = RouteTracker::new(client, config);

    for (label, route_id) in targets {
        match tracker.query_route(&route_id).await {
            Ok(RouteStatus::NextStop {
                distance,
                unit,
                station_name,
                ..
            }) => println!("{label}: {distance} {unit} to {station_name}"),
            Ok(RouteStatus::NoActiveBus) => println!("{label}: no bus currently reporting"),
            Err(err) => {
                // Cycles are isolated; log the detail, keep the output terse.
                log::warn!("query for {label} failed: {err}");
                println!("{label}: unavailable");
            }
        }
    }

    Ok(())
}
