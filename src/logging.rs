// Logging configuration utilities

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Set up the tracing subscriber based on the logging configuration
///
/// RUST_LOG takes precedence over the configured level when set.
pub fn setup(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    match config.format {
        LogFormat::Text => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .try_init();
        }
    }
}
