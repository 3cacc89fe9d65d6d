//! Settings loading
//!
//! Layers an optional settings file and `STORMGLASS_*` environment variables
//! over the client defaults.

use std::path::Path;

use integration_stormglass::StormGlassConfig;

/// Base name of the settings file looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "stormglass";

/// Prefix of environment variable overrides (e.g. `STORMGLASS_SOURCE`)
pub const ENV_PREFIX: &str = "STORMGLASS";

/// Load client settings
///
/// With `path`, that file must exist. Without it, `stormglass.{toml,json,yaml}`
/// in the working directory is used when present.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed, or a value has the
/// wrong type.
pub fn load_settings(path: Option<&Path>) -> Result<StormGlassConfig, config::ConfigError> {
    load_layered(path, environment())
}

// No key separator: `STORMGLASS_TIMEOUT_SECS` must stay the flat `timeout_secs`.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

fn load_layered(
    path: Option<&Path>,
    env: config::Environment,
) -> Result<StormGlassConfig, config::ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?
        .try_deserialize()
}
