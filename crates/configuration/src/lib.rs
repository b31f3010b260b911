use crate::error::ConfigError;
use crate::settings::DatabaseEnv;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use settings::{CredentialSource, DatabaseSettings, Settings};

/// The prefix shared by every database variable (`DB_HOST`, `DB_NAME`, ...).
const ENV_PREFIX: &str = "DB";

/// Loads the application configuration from the process environment.
///
/// This function is the primary entry point for this crate. It reads the `DB_*`
/// variables, deserializes them into our strongly-typed structs, and picks the
/// credential source.
pub fn load_settings() -> Result<Settings, ConfigError> {
    build(config::Environment::with_prefix(ENV_PREFIX))
}

/// Same as [`load_settings`], but reads from an explicit map of variables
/// instead of the process environment.
pub fn load_settings_from<I, K, V>(vars: I) -> Result<Settings, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let source: config::Map<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    build(config::Environment::with_prefix(ENV_PREFIX).source(Some(source)))
}

fn build(environment: config::Environment) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder().add_source(environment).build()?;

    let database = builder.try_deserialize::<DatabaseEnv>()?.validate()?;

    tracing::debug!(
        host = %database.host,
        port = database.port,
        name = %database.name,
        credentials = ?database.credentials,
        "Loaded database settings."
    );

    Ok(Settings { database })
}
