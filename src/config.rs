// Configuration management with environment variables, TOML files, and validation

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::errors::{Result, SnowfallError};
use crate::validation;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Monitoring configuration
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of worker tasks consuming from the queue
    pub workers: usize,
    /// Delay between produced values in milliseconds
    pub interval_ms: u64,
    /// Exclusive upper bound for produced values
    pub max_value: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub port: u16,
}

// Default implementations
impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            interval_ms: 500,
            max_value: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: 9090,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            logging: LoggingConfig::default(),
            monitoring: MonitoringConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Producer delay as a Duration
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| SnowfallError::Config {
                message: format!("Failed to read config file: {}", e),
                code: crate::errors::ErrorCode::ConfigFileNotFound,
                source: Some(Box::new(e)),
            })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| SnowfallError::Config {
                message: format!("Failed to parse config file: {}", e),
                code: crate::errors::ErrorCode::ConfigParseFailed,
                source: Some(Box::new(e)),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment variables to the configuration
    pub fn apply_env_vars(&mut self) {
        // Pipeline configuration from environment
        if let Ok(workers) = env::var("SNOWFALL_WORKERS") {
            if let Ok(n) = workers.parse() {
                self.pipeline.workers = n;
            }
        }
        if let Ok(interval) = env::var("SNOWFALL_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.pipeline.interval_ms = ms;
            }
        }
        if let Ok(bound) = env::var("SNOWFALL_MAX_VALUE") {
            if let Ok(b) = bound.parse() {
                self.pipeline.max_value = b;
            }
        }

        // Logging configuration
        if let Ok(level) = env::var("SNOWFALL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("SNOWFALL_LOG_FORMAT") {
            if format == "json" {
                self.logging.format = LogFormat::Json;
            }
        }

        // Monitoring configuration
        if let Ok(enabled) = env::var("SNOWFALL_MONITORING_ENABLED") {
            self.monitoring.enabled = enabled.parse().unwrap_or(false);
        }
        if let Ok(port) = env::var("SNOWFALL_MONITORING_PORT") {
            if let Ok(p) = port.parse() {
                self.monitoring.port = p;
            }
        }
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<()> {
        validation::validate_worker_count(self.pipeline.workers)?;
        validation::validate_interval_ms(self.pipeline.interval_ms)?;
        validation::validate_value_bound(self.pipeline.max_value)?;

        if self.monitoring.enabled {
            validation::validate_monitoring_port(self.monitoring.port)?;
        }

        Ok(())
    }

    /// Generate an example TOML configuration file
    pub fn example_toml() -> String {
        r#"# Snowfall Configuration File

[pipeline]
workers = 4        # worker tasks (>= 1); the CLI argument overrides this
interval_ms = 500  # delay between produced values (1-60000)
max_value = 100    # values are drawn from [0, max_value)

[logging]
level = "info"     # trace, debug, info, warn, error
format = "text"    # text or json

[monitoring]
enabled = false
port = 9090
"#.to_string()
    }
}
