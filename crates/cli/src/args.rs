use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the hop tracker
#[derive(Debug, Parser)]
#[command(
    name = "hop",
    version,
    about = "Report the next station and remaining distance for live HOP shuttles"
)]
pub struct CliArgs {
    /// Path to a TOML config file; the built-in Hoboken deployment values
    /// are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Distance unit override (miles, kilometers, feet, ...)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Route to query, by friendly name (green, red, blue, senior) or
    /// configured provider id; all configured routes when omitted
    pub route: Option<String>,
}
