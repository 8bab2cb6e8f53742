use thiserror::Error;

use crate::chart::ChartError;

/// Common error type for TwinSight components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),
}

/// Result type alias using TwinSight's Error.
pub type Result<T> = std::result::Result<T, Error>;
