//! Layered configuration for the CLI
//!
//! Sources, lowest precedence first: built-in defaults, `geocoder.toml` (or
//! the file given with `--config`), `GEOCODER_*` environment variables, and
//! command-line flags.

use std::path::Path;

use integration_geocoding::GeocoderConfig;

/// Values given on the command line that override every other source
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Load the geocoder configuration
///
/// An explicit `path` must exist; the default `geocoder.toml` is optional.
pub fn load(
    path: Option<&Path>,
    overrides: Overrides,
) -> Result<GeocoderConfig, config::ConfigError> {
    load_with_env(path, None, overrides)
}

/// Same as [`load`], reading `GEOCODER_*` variables from `env` instead of the
/// process environment when it is given
fn load_with_env(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
    overrides: Overrides,
) -> Result<GeocoderConfig, config::ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("geocoder").required(false),
    };

    let mut geocoder: GeocoderConfig = config::Config::builder()
        .add_source(file)
        // e.g. GEOCODER_TIMEOUT_SECS=10
        .add_source(
            config::Environment::with_prefix("GEOCODER")
                .try_parsing(true)
                .source(env),
        )
        .build()?
        .try_deserialize()?;

    if let Some(base_url) = overrides.base_url {
        geocoder.base_url = base_url;
    }
    if let Some(timeout_secs) = overrides.timeout_secs {
        geocoder.timeout_secs = timeout_secs;
    }

    Ok(geocoder)
}
