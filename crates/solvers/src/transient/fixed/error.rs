use odestep_core::DimensionMismatch;

/// Errors that can occur during fixed step integration.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),

    #[error("step size must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("time span must be finite, got [{start}, {end}]")]
    InvalidSpan { start: f64, end: f64 },

    #[error("step {step} does not advance time past {time}")]
    StalledStep { time: f64, step: f64 },
}
