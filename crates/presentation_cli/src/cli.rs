//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use integration_stormglass::StormGlassConfig;

use crate::output::OutputFormat;

/// StormGlass forecast CLI
#[derive(Debug, Parser)]
#[command(name = "stormglass-cli")]
#[command(author, version, about = "Marine forecast lookups via StormGlass", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Settings file (default: ./stormglass.toml if present)
    #[arg(short, long, env = "STORMGLASS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the hourly marine forecast for a location
    ///
    /// Example: stormglass-cli forecast --lat -33.79 --lng 151.28 --format table
    Forecast(ForecastArgs),
}

/// Arguments of the `forecast` command
#[derive(Debug, Args)]
pub struct ForecastArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Forecast model to read values from (overrides settings)
    #[arg(short, long)]
    pub source: Option<String>,

    /// API base URL (overrides settings)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl ForecastArgs {
    /// Layer command-line overrides on top of loaded settings
    #[must_use]
    pub fn apply_to(&self, mut config: StormGlassConfig) -> StormGlassConfig {
        if let Some(source) = &self.source {
            config.source.clone_from(source);
        }
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        config
    }
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
