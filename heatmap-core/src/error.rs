//! Error types for notion-heatmap.

use thiserror::Error;

/// Errors that can occur while building a heatmap.
#[derive(Error, Debug)]
pub enum HeatmapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Year {0} is outside the supported calendar range")]
    InvalidYear(i32),
}

/// Result type alias for heatmap operations.
pub type HeatmapResult<T> = Result<T, HeatmapError>;
