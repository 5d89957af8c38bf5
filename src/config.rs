use serde::Deserialize;

use crate::version::{Number, ReleaseBounds};

// =============================================================================
// Stepping defaults
// =============================================================================

/// Default per-field ceiling when stepping numbers
pub const DEFAULT_NUMBER_MAX: Number = Number::new(99, 99, 99);

/// Default serial ceiling for alpha, beta and candidate releases
pub const DEFAULT_SERIAL_MAX: u64 = 9;

/// Environment variable holding a `tracing_subscriber::EnvFilter` directive
pub const LOG_ENV: &str = "VERSION_KIT_LOG";

/// Top-level configuration, read from an inline JSON object
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub bounds: BoundsConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Ceilings used by the `next`/`prev` operations
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BoundsConfig {
    pub number_max: Number,
    pub alpha_max: u64,
    pub beta_max: u64,
    pub candidate_max: u64,
    /// Highest build index; unbounded when absent
    pub build_max: Option<u64>,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            number_max: DEFAULT_NUMBER_MAX,
            alpha_max: DEFAULT_SERIAL_MAX,
            beta_max: DEFAULT_SERIAL_MAX,
            candidate_max: DEFAULT_SERIAL_MAX,
            build_max: None,
        }
    }
}

impl BoundsConfig {
    pub fn release_bounds(&self) -> ReleaseBounds {
        ReleaseBounds::new(self.alpha_max, self.beta_max, self.candidate_max)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Filter directive used when `VERSION_KIT_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
