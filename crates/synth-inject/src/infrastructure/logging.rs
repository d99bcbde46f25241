//! Tracing subscriber bootstrap.

use tracing_subscriber::EnvFilter;

use super::config::{ConfigError, LoggingConfig};

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `config.filter` is used.  Calling this
/// twice, or after another subscriber was installed, returns
/// [`ConfigError::Logging`] instead of panicking.
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| ConfigError::Logging(format!("invalid filter {:?}: {e}", config.filter)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
