use std::io;
use std::path::PathBuf;

use thiserror::Error;

// Failures at the edges of the pipeline: config files and image output.
// Sampling and classification themselves cannot fail.
#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("raster dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("multiplier {axis} must be finite, got {value}")]
    NonFiniteMultiplier { axis: &'static str, value: f64 },

    #[error("threshold #{index} must be finite, got {value}")]
    NonFiniteThreshold { index: usize, value: f64 },

    #[error("shade frequency must be finite, got {0}")]
    NonFiniteShadeFrequency(f64),

    #[error("image output failed: {0}")]
    Image(#[from] image::ImageError),
}
