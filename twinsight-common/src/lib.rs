//! TwinSight Common Library
//!
//! This crate provides the shared model for the TwinSight demo dashboard:
//!
//! - [`device`] - Simulated device model (`Device`, `DeviceKind`)
//! - [`chart`] - Declarative chart model, validation and layout math
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types

pub mod chart;
pub mod config;
pub mod device;
pub mod error;

// Re-export commonly used types at the crate root
pub use chart::{
    BarLayout, ChartError, ChartKind, ChartSpec, Dataset, Paint, PlotArea, Rgba, ValueScale,
};
pub use config::{
    DashboardConfig, DisplayConfig, LogFormat, LoggingConfig, load_config, parse_config,
};
pub use device::{Device, DeviceKind};
pub use error::{Error, Result};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// # Example
///
/// ```ignore
/// use twinsight_common::{LogFormat, LoggingConfig, init_tracing};
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Json,
/// };
/// init_tracing(&config)?;
/// ```
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
