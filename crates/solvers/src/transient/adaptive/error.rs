use odestep_core::DimensionMismatch;

use super::ConfigError;

/// Errors that can occur during adaptive integration.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("time span must be finite, got [{start}, {end}]")]
    InvalidSpan { start: f64, end: f64 },

    #[error("step {step} does not advance time past {time}")]
    StalledStep { time: f64, step: f64 },
}
