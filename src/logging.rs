//! Logging setup for the command-line tool

use tracing_subscriber::EnvFilter;

use crate::config::{LOG_ENV, LogConfig, LogFormat};

/// Builds the filter: `VERSION_KIT_LOG` wins over the configured level
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok(), config)
}

/// An unparseable or absent directive falls back to `config.level`
fn filter_from(directive: Option<String>, config: &LogConfig) -> EnvFilter {
    directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.level))
}

/// Installs a global subscriber writing to stderr, so stdout stays reserved
/// for command output.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
