use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Common logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Display and update-cadence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Update cadence label: "1 sec", "5 sec", "10 sec" or "30 sec".
    /// Unrecognized labels fall back to "1 sec".
    #[serde(default = "default_update_frequency")]
    pub update_frequency: String,

    /// Number of samples kept in the realtime chart's rolling window.
    #[serde(default = "default_window_samples")]
    pub window_samples: usize,
}

fn default_update_frequency() -> String {
    "1 sec".to_string()
}

fn default_window_samples() -> usize {
    20
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            update_frequency: default_update_frequency(),
            window_samples: default_window_samples(),
        }
    }
}

/// Top-level configuration for the TwinSight application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dashboard_config() {
        let json5 = r#"
        {
            logging: {
                level: "debug",
                format: "json",
            },
            display: {
                update_frequency: "5 sec",
                window_samples: 40,
            },
        }
        "#;

        let config: DashboardConfig = parse_config(json5).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.display.update_frequency, "5 sec");
        assert_eq!(config.display.window_samples, 40);
    }

    #[test]
    fn test_default_config() {
        let json5 = "{}";
        let config: DashboardConfig = parse_config(json5).unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.display.update_frequency, "1 sec");
        assert_eq!(config.display.window_samples, 20);
    }

    #[test]
    fn test_parse_error_is_descriptive() {
        let result: Result<DashboardConfig> = parse_config("{ display: [ }");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
