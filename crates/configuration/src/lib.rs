use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DatabaseSettings, LoggingSettings, ServerSettings, Settings};

/// The file read by [`load_settings`] when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `BOOKSHELF__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "BOOKSHELF";

/// Loads the application settings.
///
/// Sources are layered in order of increasing precedence: the TOML file at
/// `path` (optional, may be absent), then `BOOKSHELF__*` environment
/// variables. Keys present in neither keep their built-in defaults. The
/// merged result is validated before it is returned.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    load_layered(path, environment())
}

/// The `BOOKSHELF__*` environment layer. `server.cors_origins` is read as a
/// comma-separated list.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("server.cors_origins")
        .try_parsing(true)
}

fn load_layered(path: &Path, environment: config::Environment) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(environment)
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}
