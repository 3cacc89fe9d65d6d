//! StormGlass CLI
//!
//! Fetches marine forecasts from the command line.

#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::Parser;
use integration_stormglass::{ForecastClient, StormGlassClient};
use presentation_cli::{Cli, Commands, load_settings, log_filter_from_verbosity, render};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = load_settings(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Commands::Forecast(args) => {
            let config = args.apply_to(settings);
            info!(
                source = %config.source,
                base_url = %config.base_url,
                "Requesting forecast"
            );

            let client = StormGlassClient::new(config).context("Failed to create client")?;
            let points = client
                .fetch_points(args.lat, args.lng)
                .await
                .context("Failed to fetch forecast")?;

            info!(hours = points.len(), "Forecast received");
            println!("{}", render(&points, args.format)?);
        },
    }

    Ok(())
}
