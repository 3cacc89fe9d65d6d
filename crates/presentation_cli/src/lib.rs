//! StormGlass CLI support
//!
//! Argument parsing, settings loading and output rendering for the
//! `stormglass-cli` binary.

mod cli;
mod output;
mod settings;

pub use cli::{Cli, Commands, ForecastArgs, log_filter_from_verbosity};
pub use output::{OutputFormat, render};
pub use settings::{DEFAULT_CONFIG_NAME, ENV_PREFIX, load_settings};
