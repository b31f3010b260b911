use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Installs the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG` and falls back to `info`. Timestamps and
/// targets are left out because CloudWatch already stamps every line.
pub fn init_tracing() -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| ConfigError::TelemetryError(e.to_string()))
}
