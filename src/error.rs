//! Configuration errors
//!
//! The simulation step itself is total; everything that can go wrong is caught
//! while building a [`crate::SimState`] from settings.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("asteroid count must be non-negative and fit in u32, got {0}")]
    InvalidAsteroidCount(i64),

    #[error("world size must be finite and positive, got {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },

    #[error("ship radius bounds are inverted or non-positive: min {min}, max {max}")]
    InvalidRadiusBounds { min: f32, max: f32 },

    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}
