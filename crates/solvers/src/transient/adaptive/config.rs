use thiserror::Error;

/// Configuration for the adaptive solver.
///
/// The step-doubling quality of each attempt is compared against two
/// thresholds. Above `upper_tol` the step is halved and retried, below
/// `lower_tol` it is accepted and doubled for the next step, and anything in
/// between is accepted as is.
///
/// `min_step` is a floor on halving, not a hard limit: once the step falls
/// below it the solver stops retrying and accepts whatever it has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    min_step: f64,
    initial_step: f64,
    max_step: Option<f64>,
    max_attempts: usize,
    lower_tol: f64,
    upper_tol: f64,
}

/// Errors that can occur when validating an adaptive solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_step must be finite and positive")]
    MinStep,

    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("max_step must be finite and at least initial_step")]
    MaxStep,

    #[error("max_attempts must be at least 1")]
    MaxAttempts,

    #[error("tolerances must be finite with 0 <= lower_tol <= upper_tol")]
    Tolerances,
}

impl Config {
    /// Default number of step attempts per accepted step.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

    /// Default quality below which the step size is doubled.
    pub const DEFAULT_LOWER_TOL: f64 = 0.0005;

    /// Default quality above which the step size is halved.
    pub const DEFAULT_UPPER_TOL: f64 = 0.005;

    /// Creates a new config with the default attempt limit and tolerances.
    ///
    /// No upper bound is placed on the step size, so a system that stays
    /// below `lower_tol` keeps doubling it.
    ///
    /// # Errors
    ///
    /// Returns an error if either step is zero, negative, or non-finite.
    pub fn new(min_step: f64, initial_step: f64) -> Result<Self, ConfigError> {
        if !min_step.is_finite() || min_step <= 0.0 {
            return Err(ConfigError::MinStep);
        }
        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }

        Ok(Self {
            min_step,
            initial_step,
            max_step: None,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            lower_tol: Self::DEFAULT_LOWER_TOL,
            upper_tol: Self::DEFAULT_UPPER_TOL,
        })
    }

    /// Caps the step size reached by doubling.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_step` is non-finite or below the initial step.
    pub fn with_max_step(mut self, max_step: f64) -> Result<Self, ConfigError> {
        if !max_step.is_finite() || max_step < self.initial_step {
            return Err(ConfigError::MaxStep);
        }
        self.max_step = Some(max_step);
        Ok(self)
    }

    /// Sets how many attempts are made before a step is accepted regardless.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::MaxAttempts);
        }
        self.max_attempts = max_attempts;
        Ok(self)
    }

    /// Sets the quality thresholds for doubling and halving the step.
    ///
    /// # Errors
    ///
    /// Returns an error unless both are finite and `0 <= lower <= upper`.
    pub fn with_tolerances(mut self, lower_tol: f64, upper_tol: f64) -> Result<Self, ConfigError> {
        if !lower_tol.is_finite() || !upper_tol.is_finite() {
            return Err(ConfigError::Tolerances);
        }
        if lower_tol < 0.0 || lower_tol > upper_tol {
            return Err(ConfigError::Tolerances);
        }
        self.lower_tol = lower_tol;
        self.upper_tol = upper_tol;
        Ok(self)
    }

    /// Returns the step size below which halving stops.
    #[must_use]
    pub fn min_step(&self) -> f64 {
        self.min_step
    }

    /// Returns the step size of the first attempt.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the cap on doubling, if any.
    #[must_use]
    pub fn max_step(&self) -> Option<f64> {
        self.max_step
    }

    /// Returns the number of attempts per accepted step.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns the quality below which the step size is doubled.
    #[must_use]
    pub fn lower_tol(&self) -> f64 {
        self.lower_tol
    }

    /// Returns the quality above which the step size is halved.
    #[must_use]
    pub fn upper_tol(&self) -> f64 {
        self.upper_tol
    }
}
